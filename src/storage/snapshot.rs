//! Snapshot document format.

use crate::book::AddressBook;
use crate::domain::{ContactName, ValidationError};
use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One contact as it appears in a snapshot.
///
/// Fields are kept as plain text so they can be re-validated on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub name: String,

    #[serde(default)]
    pub phones: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

/// The persisted form of an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,

    #[serde(default)]
    pub contacts: Vec<SnapshotRecord>,
}

impl Snapshot {
    /// Capture every record of `book` in insertion order.
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts = book
            .iter()
            .map(|record| SnapshotRecord {
                name: record.name().to_string(),
                phones: record.phones().iter().map(|p| p.to_string()).collect(),
                birthday: record.birthday().map(|b| b.to_string()),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            contacts,
        }
    }

    /// Rebuild the address book, validating every stored field.
    ///
    /// Records sharing a name collapse to the last one.
    pub fn into_book(self) -> StorageResult<AddressBook> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(self.version));
        }

        self.contacts
            .into_iter()
            .map(|entry| entry.into_record().map_err(StorageError::InvalidRecord))
            .collect()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> StorageResult<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> StorageResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl SnapshotRecord {
    fn into_record(self) -> Result<ContactRecord, ValidationError> {
        let mut record = ContactRecord::with_name(ContactName::new(&self.name)?);
        for phone in &self.phones {
            record.add_phone(phone)?;
        }
        if let Some(date) = self.birthday.as_deref() {
            record.set_birthday(date)?;
        }
        Ok(record)
    }
}
