use std::path::PathBuf;

use clap::Args;

use crate::application::data::LogLevel;

/// Flags every tool accepts. Without any, a tool works on the current directory.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The root directory of the project
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,
}
