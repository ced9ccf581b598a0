use thiserror::Error;

/// mktdash error types
#[derive(Error, Debug)]
pub enum DashError {
    /// Failed to parse dataset JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset failed validation (empty, duplicate month, ...)
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Selection does not match any month or quarter in the dataset
    #[error("unknown period: {0}")]
    UnknownPeriod(String),
}

/// Result type alias for mktdash
pub type Result<T> = std::result::Result<T, DashError>;
