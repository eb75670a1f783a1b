//! Error types for the phone book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors returned by [`Directory::add_entry`](crate::Directory::add_entry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field was blank, or the phone number contained a non-digit
    #[error("{0}")]
    InvalidArgument(#[from] ValidationError),

    /// The phone number is already present in the directory
    #[error("Phone number already exists in the phone book: {phone_number}")]
    DuplicateEntry { phone_number: String },
}

impl DirectoryError {
    /// The tag of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DuplicateEntry { .. } => ErrorKind::DuplicateEntry,
        }
    }
}

/// Failure category of a [`DirectoryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidArgument,
    DuplicateEntry,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::DuplicateEntry => write!(f, "duplicate_entry"),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::from(ValidationError::EmptyField(Field::FirstName));
        assert_eq!(err.to_string(), "First name cannot be empty or null");

        let err = DirectoryError::DuplicateEntry {
            phone_number: "1234567890".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Phone number already exists in the phone book: 1234567890"
        );

        let err = ConfigError::InvalidValue {
            var: "PHONEBOOK_OUTPUT".to_string(),
            reason: "expected text or json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PHONEBOOK_OUTPUT: expected text or json"
        );
    }

    #[test]
    fn test_error_kind() {
        let err = DirectoryError::from(ValidationError::NonDigitPhone("12-3".to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = DirectoryError::DuplicateEntry {
            phone_number: "123".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::DuplicateEntry);
        assert_eq!(err.kind().to_string(), "duplicate_entry");
    }

    #[test]
    fn test_error_kind_serialization() {
        let json = serde_json::to_string(&ErrorKind::InvalidArgument).unwrap();
        assert_eq!(json, "\"invalid_argument\"");
    }
}
