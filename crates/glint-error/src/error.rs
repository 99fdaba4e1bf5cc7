//! Driver errors
//!
//! The scanner itself never fails. These are the failures of the tools
//! built around it: reading sources, rejecting illegal input, setting up
//! logging.

use std::path::PathBuf;
use thiserror::Error;

/// Standard glint result type
pub type Result<T> = std::result::Result<T, GlintError>;

#[derive(Debug, Error)]
pub enum GlintError {
    /// A source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained characters the scanner does not recognize
    #[error("found {count} illegal character(s)")]
    Lexical { count: usize },

    /// Reading the prompt or writing results failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The logging subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

impl GlintError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GlintError::Io {
            path: path.into(),
            source,
        }
    }
}
