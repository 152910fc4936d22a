use crate::store::fs::DEFAULT_DATA_FILE;
use std::path::PathBuf;

/// Runtime settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimenConfig {
    /// Where the regimen document lives, relative to the working directory.
    pub data_file: PathBuf,

    /// Clear the terminal before each screen.
    pub clear_screen: bool,

    /// Raise the default log level to debug.
    pub verbose: bool,
}

impl Default for RegimenConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            clear_screen: true,
            verbose: false,
        }
    }
}

impl RegimenConfig {
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Default filter directive for the log subscriber.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
