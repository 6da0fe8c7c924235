//! Data models for address book entries.
//!
//! A `ContactRecord` groups the validated fields of one person.

pub mod record;

pub use record::ContactRecord;
