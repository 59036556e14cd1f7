use std::error::Error;
use std::fmt;

/// Failure of a single JMA request. Carried as a value, never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    JsonParse(String),
    UnexpectedShape(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Status(code) => write!(f, "HTTP status {code}"),
            FetchError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            FetchError::UnexpectedShape(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for FetchError {}
