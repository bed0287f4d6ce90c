use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading or analyzing stock data.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("cannot open stock data source {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Recorded per row in the load report; the load itself keeps going.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("invalid window size {window}: must be between 1 and {len}")]
    InvalidWindow { window: usize, len: usize },

    #[error("no stock records to analyze")]
    EmptyInput,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
