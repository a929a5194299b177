use clap::Parser;

/// Nationwide summaries and integrity checks over the snapshots of unopposed candidates.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON configuration file. The options passed on the command line
    /// take precedence over the content of this file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (directory) The directory containing the state snapshots (`<state>_<year>.json`).
    #[clap(short, long, value_parser)]
    pub data_dir: Option<String>,

    /// (default: current year) The year to summarize. Also restricts the checks and the
    /// manifest to this year.
    #[clap(short, long, value_parser)]
    pub year: Option<u32>,

    /// (list of two-letter codes or not specified) The states to include in the summary.
    /// All the states are included if not specified.
    #[clap(short, long, value_parser)]
    pub states: Option<Vec<String>>,

    /// (file path, 'stdout' or empty) If specified, the manifest with the nationwide statistics
    /// of all the years will be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference manifest. If provided, the nationwide statistics are checked
    /// against the ones of the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, runs the integrity checks over all the snapshots and fails
    /// if any violation is found.
    #[clap(long, takes_value = false)]
    pub check: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
