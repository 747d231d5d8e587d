//! Unified error codes for the storefront
//!
//! This module defines the error codes produced by the server, the cart store
//! and the image gateway. Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, JavaScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 6xxx: Catalog ====================
    /// Catalog file could not be read or parsed
    CatalogUnavailable = 6201,

    // ==================== 9xxx: System ====================
    /// Image service request failed
    ImageServiceFailed = 9102,

    // ==================== 94xx: Storage ====================
    /// Storage corrupted (value could not be encoded)
    StorageCorrupted = 9403,
    /// Storage unavailable (IO error, retry later)
    StorageUnavailable = 9404,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::CatalogUnavailable => "Catalog is unavailable",
            ErrorCode::ImageServiceFailed => "Image service request failed",
            ErrorCode::StorageCorrupted => "Storage corrupted (stored value damaged)",
            ErrorCode::StorageUnavailable => "Storage unavailable, please retry later",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            6201 => Ok(ErrorCode::CatalogUnavailable),
            9102 => Ok(ErrorCode::ImageServiceFailed),
            9403 => Ok(ErrorCode::StorageCorrupted),
            9404 => Ok(ErrorCode::StorageUnavailable),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::CatalogUnavailable.code(), 6201);
        assert_eq!(ErrorCode::ImageServiceFailed.code(), 9102);
        assert_eq!(ErrorCode::StorageCorrupted.code(), 9403);
    }

    #[test]
    fn test_try_from_roundtrip_all_known_codes() {
        let codes = [
            ErrorCode::ValidationFailed,
            ErrorCode::CatalogUnavailable,
            ErrorCode::ImageServiceFailed,
            ErrorCode::StorageCorrupted,
            ErrorCode::StorageUnavailable,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(
            InvalidErrorCode(1234).to_string(),
            "invalid error code: 1234"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::CatalogUnavailable).unwrap();
        assert_eq!(json, "6201");
        let code: ErrorCode = serde_json::from_str("9404").unwrap();
        assert_eq!(code, ErrorCode::StorageUnavailable);
        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "2");
    }
}
