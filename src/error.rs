use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the moving average pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid event on line {line}: {reason}")]
    InputFormat { line: usize, reason: String },

    #[error("no events to average")]
    EmptyInput,

    #[error("window size must be at least 1, but is {0}")]
    InvalidWindowSize(usize),

    #[error("invalid time range: {0}")]
    InvalidRange(String),
}
