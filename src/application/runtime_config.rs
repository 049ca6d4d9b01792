use std::path::PathBuf;

use crate::application::data::LogLevel;
use crate::cli::CommonArgs;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory the tool works on, as given on the command line
    pub root: PathBuf,
    pub log_level: LogLevel,
}

impl RuntimeConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            log_level: LogLevel::default(),
        }
    }
}

impl From<CommonArgs> for RuntimeConfig {
    fn from(args: CommonArgs) -> Self {
        Self {
            root: args.root,
            log_level: args.log_level,
        }
    }
}
