//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book and contact record operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A name, phone, or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact exists but does not carry the given phone number
    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    /// Reading or writing the snapshot failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur while persisting or restoring a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON or has the wrong shape
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// Snapshot holds a field that no longer validates
    #[error("Invalid record in snapshot: {0}")]
    InvalidRecord(ValidationError),
}

/// Errors raised while parsing an assistant command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The line held no command word
    #[error("Enter a command")]
    Empty,

    /// The command word is not recognised
    #[error("Invalid command: {0}")]
    Unknown(String),

    /// The command was given too few or too many arguments
    #[error("Wrong arguments for {command}. Usage: {usage}")]
    WrongArguments {
        command: &'static str,
        usage: &'static str,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("Jane".to_string());
        assert_eq!(err.to_string(), "Contact not found: Jane");

        let err = BookError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = StorageError::UnsupportedVersion(9);
        assert_eq!(err.to_string(), "Unsupported snapshot version: 9");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be between 1 and 366".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_WINDOW_DAYS"));

        let err = CommandError::Unknown("fly".to_string());
        assert_eq!(err.to_string(), "Invalid command: fly");
    }

    #[test]
    fn test_phone_not_found_display() {
        let err = BookError::PhoneNotFound {
            name: "John".to_string(),
            phone: "0000000000".to_string(),
        };
        assert_eq!(err.to_string(), "Phone number 0000000000 not found for John");
    }

    #[test]
    fn test_storage_error_is_transparent_in_book_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BookError::from(StorageError::from(io));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
