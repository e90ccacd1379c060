use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntervalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Metadata has {metadata} rows but there are {intervals} intervals")]
    RowCountMismatch { intervals: usize, metadata: usize },

    #[error("Missing interval column '{0}' in header")]
    MissingColumn(String),

    #[error("Error parsing line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
