use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request timed out after {after:?}")]
    Timeout { after: Duration },
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Numeric status for `HttpStatus`, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
