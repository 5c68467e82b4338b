use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoccmpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The request never completed or the reply could not be understood.
    /// The detail is logged, the user sees the generic retry message.
    #[error("Failed to compare documents. Please try again.")]
    Transport(String),

    /// Error message reported by the compare server.
    #[error("{0}")]
    Server(String),

    #[error("Please select both documents.")]
    MissingSelection,

    #[error("No results to export")]
    NoResults,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl DoccmpError {
    /// Detail suitable for the log file, richer than the user-facing text.
    pub fn detail(&self) -> String {
        match self {
            DoccmpError::Transport(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DoccmpError>;
