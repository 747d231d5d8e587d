//! Cart and client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Storage write failure
///
/// Reads never fail: corrupt or unreadable values come back as empty collections.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file could not be written
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Io(_) => ErrorCode::StorageUnavailable,
            StoreError::Serialization(_) => ErrorCode::StorageCorrupted,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_codes() {
        let io = StoreError::Io(std::io::Error::other("disk"));
        assert_eq!(io.code(), ErrorCode::StorageUnavailable);

        let app: AppError = io.into();
        assert_eq!(app.code, ErrorCode::StorageUnavailable);
        assert!(app.message.contains("disk"));

        let bad = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert_eq!(StoreError::from(bad).code(), ErrorCode::StorageCorrupted);
    }
}
