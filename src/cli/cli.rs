use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// The directory to render
    #[clap(default_value = ".")]
    pub root: PathBuf,

    /// Entry names to exclude, matched exactly at every directory level
    #[clap(long, short)]
    pub ignore: Vec<String>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
