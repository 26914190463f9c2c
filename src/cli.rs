use crate::projector::{SeverityFilter, SortOrder};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "incidash", version, about = "AI Safety Incident Dashboard TUI")]
pub struct Cli {
    /// JSON file with seed incidents (replaces the built-in examples)
    #[arg(long, value_name = "FILE", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with no incidents
    #[arg(long)]
    pub empty: bool,

    /// Initial severity filter
    #[arg(short, long, value_enum, default_value_t = SeverityFilter::All)]
    pub filter: SeverityFilter,

    /// Initial sort order
    #[arg(short, long, value_enum, default_value_t = SortOrder::Newest)]
    pub sort: SortOrder,

    /// Print the projected incident list as JSON and exit
    #[arg(long)]
    pub dump: bool,

    /// Write debug logs to $XDG_STATE_HOME/incidash/debug.log
    #[arg(short, long)]
    pub verbose: bool,
}
