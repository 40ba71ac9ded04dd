use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("User \"{0}\" not found. Please try another username.")]
    UserNotFound(String),
    #[error("Failed to fetch user")]
    FetchUser(StatusCode),
    #[error("Failed to fetch repositories")]
    FetchRepositories(StatusCode),
    #[error("Failed to fetch user events")]
    FetchEvents(StatusCode),
    #[error("Username must not be empty")]
    EmptyUsername,
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PulseError {
    /// Status code attached to a stage failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PulseError::FetchUser(status)
            | PulseError::FetchRepositories(status)
            | PulseError::FetchEvents(status) => Some(*status),
            PulseError::Request(err) => err.status(),
            _ => None,
        }
    }
}
