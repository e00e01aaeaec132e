use thiserror::Error;

/// The single failure kind of the directory service. Connection errors,
/// non-2xx responses and malformed payloads all collapse into it; callers
/// never need to tell them apart, only to log them.
#[derive(Debug, Error)]
#[error("user directory request failed: {0}")]
pub struct DirectoryError(String);

impl DirectoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}
