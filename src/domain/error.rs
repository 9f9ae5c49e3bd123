use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A departure airport outside the supported set. Raised before any
    /// provider call is made.
    #[error("Unsupported origin: {0}")]
    UnsupportedOrigin(String),

    /// The constraints filtered out every destination. Callers should suggest
    /// relaxing stops, travel time or destination style.
    #[error("No destinations satisfy the trip constraints")]
    NoCandidates,

    /// An option id that no earlier recommendation run produced.
    #[error("Unknown option {0}: regenerate recommendations and try again")]
    MissingContext(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Parse(e.to_string())
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
