use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for TreeTop
#[derive(Error, Debug)]
pub enum TreetopError {
    #[error("Could not open config file '{path}': {source}")]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not obtain file stats for: '{name}': {source}")]
    Stat {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for TreeTop
pub type Result<T> = std::result::Result<T, TreetopError>;

impl TreetopError {
    /// Create a config open error
    pub fn config_open<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        TreetopError::ConfigOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a stat error for a monitored file
    pub fn stat<S: Into<String>>(name: S, source: io::Error) -> Self {
        TreetopError::Stat {
            name: name.into(),
            source,
        }
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        TreetopError::Tui(msg.into())
    }
}
