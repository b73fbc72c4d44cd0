use log::{debug, info, warn};

use poll_tracker::*;
use snafu::{prelude::*, Snafu};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use text_diff::print_diff;

use crate::args::Args;
use crate::tracker::config_reader::*;
use crate::tracker::summary::build_summary_js;

pub mod config_reader;
pub mod summary;

#[derive(Debug, Snafu)]
pub enum TrackerError {
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the configuration file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error writing the summary"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Invalid color for party {party}"))]
    InvalidColor {
        source: ParseRgbError,
        party: String,
    },
    #[snafu(display("Unknown view {view:?}, expected 'all' or 'aggregate'"))]
    UnknownView { view: String },
    #[snafu(display("Unknown measure {by:?}, expected 'seats' or 'votes'"))]
    UnknownMeasure { by: String },
    #[snafu(display("Poll error: {source}"))]
    PollModel { source: PollErrors },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Which polls get drawn.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum View {
    All,
    Aggregate,
}

/// What the stars count.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Measure {
    Seats,
    Votes,
}

fn parse_view(view: &Option<String>) -> TrackerResult<View> {
    match view.as_deref().map(|s| s.to_lowercase()) {
        None => Ok(View::All),
        Some(s) if s == "all" => Ok(View::All),
        Some(s) if s == "aggregate" => Ok(View::Aggregate),
        Some(s) => UnknownViewSnafu { view: s }.fail(),
    }
}

fn parse_measure(by: &Option<String>) -> TrackerResult<Measure> {
    match by.as_deref().map(|s| s.to_lowercase()) {
        None => Ok(Measure::Seats),
        Some(s) if s == "seats" => Ok(Measure::Seats),
        Some(s) if s == "votes" => Ok(Measure::Votes),
        Some(s) => UnknownMeasureSnafu { by: s }.fail(),
    }
}

/// Draws one poll on its own, against the seats its parties hold together.
fn draw_single_poll(poll: &Poll, measure: Measure) -> TrackerResult<String> {
    let seats = poll.total_projected_seats().round() as u32;
    let mut holder = PollList::new(1, seats);
    holder.add_poll(poll.clone()).context(PollModelSnafu {})?;
    Ok(match measure {
        Measure::Seats => holder.text_visualization_by_seats(),
        Measure::Votes => holder.text_visualization_by_votes(),
    })
}

pub fn draw(
    polls: &PollList,
    party_names: &[String],
    view: View,
    measure: Measure,
) -> TrackerResult<String> {
    let mut res = String::new();
    if view == View::All {
        for poll in polls.polls() {
            res.push_str(&draw_single_poll(poll, measure)?);
        }
    }
    let aggregate = polls.aggregate_poll(party_names);
    res.push_str(&draw_single_poll(&aggregate, measure)?);
    Ok(res)
}

fn write_summary(path: &str, js: &serde_json::Value) -> TrackerResult<()> {
    let pretty = serde_json::to_string_pretty(js).context(WritingJsonSnafu {})?;
    if path == "stdout" {
        println!("{}", pretty);
    } else {
        info!("Writing summary to {:?}", path);
        fs::write(path, pretty).context(WritingFileSnafu { path })?;
    }
    Ok(())
}

/// Builds the polls described by the arguments and returns their drawing.
pub fn run_tracker(args: &Args) -> TrackerResult<String> {
    let view = parse_view(&args.view)?;
    let measure = parse_measure(&args.by)?;

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => TrackerConfig::default(),
    };
    debug!("config: {:?}", config);
    let factory = build_factory(&config, args)?;
    info!("{}", factory);

    let (polls, party_names) = match &config.polls {
        Some(entered) => {
            let list = build_entered_polls(&factory, entered)?;
            let names = list.party_names();
            (list, names)
        }
        None if args.random => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (
                factory.create_configured_random_poll_list(&mut rng),
                factory.party_names().to_vec(),
            )
        }
        None => (
            factory.create_configured_empty_polls(),
            factory.party_names().to_vec(),
        ),
    };

    let drawing = draw(&polls, &party_names, view, measure)?;

    if let Some(out) = &args.out {
        let aggregate = polls.aggregate_poll(&party_names);
        write_summary(out, &build_summary_js(&factory, &polls, &aggregate))?;
    }

    // The reference drawing, if provided for comparison
    if let Some(reference_p) = &args.reference {
        let reference =
            fs::read_to_string(reference_p).context(OpeningFileSnafu { path: reference_p })?;
        if reference != drawing {
            warn!("Found differences with the reference drawing");
            print_diff(reference.as_str(), drawing.as_str(), "\n");
            whatever!("Difference detected between the drawing and the reference drawing")
        }
    }

    Ok(drawing)
}
