// Reading the JSON configuration and turning it into a factory and polls.

use crate::args::Args;
use crate::tracker::*;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PartyConfig {
    pub name: String,
    pub color: Option<String>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct EnteredParty {
    pub name: String,
    pub seats: f64,
    /// In points, from 0 to 100.
    pub percentage: f64,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct EnteredPoll {
    pub name: String,
    pub parties: Vec<EnteredParty>,
}

#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(rename = "numOfSeats")]
    pub num_of_seats: Option<u32>,
    #[serde(rename = "numOfPolls")]
    pub num_of_polls: Option<usize>,
    pub parties: Option<Vec<PartyConfig>>,
    pub polls: Option<Vec<EnteredPoll>>,
}

pub fn read_config(path: &str) -> TrackerResult<TrackerConfig> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu { path })?;
    debug!("read content: {:?}", contents);
    let config: TrackerConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(config)
}

fn parse_color(party: &str, color: &str) -> TrackerResult<Rgb> {
    color.parse::<Rgb>().context(InvalidColorSnafu { party })
}

/// Sets up the factory from the configuration file, then from the command line
/// flags that override it.
pub fn build_factory(config: &TrackerConfig, args: &Args) -> TrackerResult<Factory> {
    let mut factory = Factory::default();

    if let Some(seats) = args.seats.or(config.num_of_seats) {
        factory.set_num_of_seats(seats);
    }
    let entered_polls = config.polls.as_ref().map(|p| p.len());
    if let Some(n) = args.polls.or(config.num_of_polls).or(entered_polls) {
        factory.set_num_of_polls(n);
    }

    let mut names: Option<Vec<String>> = None;
    let mut colors: Option<Vec<Rgb>> = None;
    if let Some(parties) = &config.parties {
        let mut cs: Vec<Rgb> = Vec::new();
        for p in parties {
            cs.push(match &p.color {
                Some(c) => parse_color(&p.name, c)?,
                None => PLACEHOLDER_COLOR,
            });
        }
        names = Some(parties.iter().map(|p| p.name.clone()).collect());
        colors = Some(cs);
    }

    if let Some(arg_names) = &args.parties {
        names = Some(arg_names.iter().map(|s| s.trim().to_string()).collect());
        // Names without colors are drawn with the placeholder color.
        colors = Some(Vec::new());
    }
    if let Some(arg_colors) = &args.colors {
        let mut cs: Vec<Rgb> = Vec::new();
        for (idx, c) in arg_colors.iter().enumerate() {
            let party = names
                .as_deref()
                .unwrap_or_else(|| factory.party_names())
                .get(idx)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_PARTY_NAME.to_string());
            cs.push(parse_color(&party, c)?);
        }
        colors = Some(cs);
        if names.is_none() {
            names = Some(factory.party_names().to_vec());
        }
    }

    factory.set_party_identifiers(names.as_deref(), colors.as_deref());
    Ok(factory)
}

/// The polls as entered in the configuration. Parties take the color configured
/// for their name, if any. The list has room for every entered poll, even when
/// fewer polls are configured.
pub fn build_entered_polls(factory: &Factory, entered: &[EnteredPoll]) -> TrackerResult<PollList> {
    let capacity = factory.num_of_polls().max(entered.len());
    let mut list = PollList::new(capacity, factory.num_of_seats());
    for ep in entered {
        let mut poll = Poll::new(ep.name.as_str(), ep.parties.len());
        for ed in ep.parties.iter() {
            let mut party =
                Party::with_projection(ed.name.as_str(), ed.seats, ed.percentage / 100.0);
            let color = factory
                .party_names()
                .iter()
                .position(|n| n.to_uppercase() == ed.name.to_uppercase())
                .map(|idx| factory.party_colors()[idx]);
            party.set_color(color);
            if let Err(e) = poll.add_party(party) {
                warn!("Poll {}: {}", ep.name, e);
            }
        }
        if let Err(e) = list.add_poll(poll) {
            warn!("{}", e);
        }
    }
    info!("Read {} polls from the configuration", list.number_of_polls());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_args() -> Args {
        Args {
            config: None,
            seats: None,
            polls: None,
            parties: None,
            colors: None,
            random: false,
            seed: None,
            view: None,
            by: None,
            out: None,
            reference: None,
            verbose: false,
        }
    }

    #[test]
    fn parses_config() {
        let js = r##"{"numOfSeats": 20, "parties": [{"name": "A", "color": "#010203"}, {"name": "B"}]}"##;
        let config: TrackerConfig = serde_json::from_str(js).unwrap();
        let factory = build_factory(&config, &no_args()).unwrap();
        assert_eq!(factory.num_of_seats(), 20);
        assert_eq!(factory.num_of_polls(), 5);
        assert_eq!(factory.party_names(), &["A", "B"]);
        assert_eq!(factory.party_colors(), &[Rgb::new(1, 2, 3), PLACEHOLDER_COLOR]);
    }

    #[test]
    fn flags_override_config() {
        let config = TrackerConfig {
            num_of_seats: Some(20),
            parties: Some(vec![PartyConfig {
                name: "A".to_string(),
                color: Some("red".to_string()),
            }]),
            ..TrackerConfig::default()
        };
        let args = Args {
            seats: Some(30),
            polls: Some(2),
            parties: Some(vec!["X".to_string(), " Y".to_string()]),
            ..no_args()
        };
        let factory = build_factory(&config, &args).unwrap();
        assert_eq!(factory.num_of_seats(), 30);
        assert_eq!(factory.num_of_polls(), 2);
        assert_eq!(factory.party_names(), &["X", "Y"]);
        assert_eq!(factory.party_colors(), &[PLACEHOLDER_COLOR, PLACEHOLDER_COLOR]);
    }

    #[test]
    fn extra_colors_become_unknown_parties() {
        let args = Args {
            parties: Some(vec!["X".to_string()]),
            colors: Some(vec!["green".to_string(), "blue".to_string()]),
            ..no_args()
        };
        let factory = build_factory(&TrackerConfig::default(), &args).unwrap();
        assert_eq!(factory.party_names(), &["X", UNKNOWN_PARTY_NAME]);
        assert_eq!(factory.party_colors(), &[Rgb::GREEN, Rgb::BLUE]);
    }

    #[test]
    fn bad_color() {
        let args = Args {
            colors: Some(vec!["red".to_string(), "chartreuse".to_string()]),
            ..no_args()
        };
        let res = build_factory(&TrackerConfig::default(), &args);
        match res {
            Err(TrackerError::InvalidColor { party, .. }) => assert_eq!(party, "CPC"),
            x => panic!("unexpected {:?}", x),
        }
    }

    #[test]
    fn entered_polls_keep_configured_colors() {
        let config: TrackerConfig = serde_json::from_str(
            r#"{"parties": [{"name": "A", "color": "red"}],
                "polls": [{"name": "P", "parties": [
                    {"name": "a", "seats": 3, "percentage": 40},
                    {"name": "Z", "seats": -1, "percentage": 140}]}]}"#,
        )
        .unwrap();
        let factory = build_factory(&config, &no_args()).unwrap();
        assert_eq!(factory.num_of_polls(), 1);
        let list = build_entered_polls(&factory, config.polls.as_ref().unwrap()).unwrap();
        let poll = list.poll("P").unwrap();
        let a = poll.party("A").unwrap();
        assert_eq!(a.color(), Some(Rgb::RED));
        assert_eq!(a.projected_percentage_of_votes(), 0.4);
        let z = poll.party("Z").unwrap();
        assert_eq!(z.color(), None);
        assert_eq!(z.projected_number_of_seats(), 0.0);
        assert_eq!(z.projected_percentage_of_votes(), 0.0);
    }

    #[test]
    fn all_entered_polls_are_kept() {
        let config: TrackerConfig = serde_json::from_str(
            r#"{"numOfPolls": 1,
                "polls": [{"name": "P1", "parties": []}, {"name": "P2", "parties": []}]}"#,
        )
        .unwrap();
        let args = Args {
            polls: Some(0),
            ..no_args()
        };
        for a in [no_args(), args] {
            let factory = build_factory(&config, &a).unwrap();
            let list = build_entered_polls(&factory, config.polls.as_ref().unwrap()).unwrap();
            assert_eq!(list.number_of_polls(), 2);
            assert!(list.poll("P2").is_some());
        }
    }
}
