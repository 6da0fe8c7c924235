//! Address Book - a validated in-memory contact directory.
//!
//! Contacts carry a name, any number of 10-digit phone numbers, and an
//! optional birthday. The book answers exact-name lookups and "whose birthday
//! is coming up" queries, and persists itself as a versioned JSON snapshot.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record built from those values
//! - **book**: The address book and its birthday query
//! - **storage**: Snapshot format and the file-backed store
//! - **assistant**: Line-oriented command interface used by the binary
//! - **error**: Error types for records, storage, commands, and configuration
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::ContactRecord;
pub use storage::{FileSnapshotStore, Snapshot, SnapshotStore};
