use clap::Parser;

/// This is a poll tracking program: it generates or reads the polls of an election
/// and draws them as star-bar charts.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the election settings and, optionally, the
    /// polls as entered by hand. See the manual of the poll_tracker crate for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (default 345) The number of seats in the election. Overrides the configuration file.
    #[clap(short, long, value_parser)]
    pub seats: Option<u32>,

    /// (default 5) The number of polls to track. Overrides the configuration file.
    #[clap(short, long, value_parser)]
    pub polls: Option<usize>,

    /// (list of comma-separated names) The parties in the election.
    #[clap(long, value_parser, value_delimiter = ',')]
    pub parties: Option<Vec<String>>,

    /// (list of comma-separated colors) The colors of the parties, in the same order as
    /// the names. Colors are #rrggbb or a color name.
    #[clap(long, value_parser, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// If passed, the polls are generated at random instead of being left empty.
    /// Ignored when the configuration file contains polls.
    #[clap(long, takes_value = false)]
    pub random: bool,

    /// (number, optional) Seed for the random generation, to get the same polls again.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// (default all) 'all' draws every poll then the aggregate, 'aggregate' only the aggregate.
    #[clap(long, value_parser)]
    pub view: Option<String>,

    /// (default seats) 'seats' or 'votes': what the stars count.
    #[clap(long, value_parser)]
    pub by: Option<String>,

    /// (file path, 'stdout' or empty) If specified, a summary of the polls and of the
    /// aggregate will be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected drawing. If provided, polltracker
    /// will check that its drawing matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
