//! Address book storage and queries.

use crate::error::StorageResult;
use crate::models::ContactRecord;
use crate::storage::Snapshot;
use chrono::NaiveDate;
use std::io::{Read, Write};

/// A contact whose birthday falls inside a query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The date the birthday is next observed on or after the reference date
    pub date: NaiveDate,
}

/// An in-memory address book.
///
/// Records are keyed by their trimmed name. Listing follows insertion order;
/// replacing a record keeps the position of the one it replaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record stored under the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        match self.position(record.name().as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        let index = self.position(name)?;
        self.records.get(index)
    }

    /// Look up a record by exact name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        let index = self.position(name)?;
        self.records.get_mut(index)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `true` if a record was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Contacts whose next birthday is fewer than `window_days` days after
    /// `reference`, counting `reference` itself as day zero.
    ///
    /// Results follow the book's insertion order.
    pub fn upcoming_birthdays(
        &self,
        window_days: i64,
        reference: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let next = birthday.next_occurrence(reference);
                let days_until = (next - reference).num_days();
                (0..window_days)
                    .contains(&days_until)
                    .then(|| UpcomingBirthday {
                        name: record.name().to_string(),
                        date: next,
                    })
            })
            .collect()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the whole book as a snapshot.
    pub fn save<W: Write>(&self, writer: W) -> StorageResult<()> {
        Snapshot::from_book(self).write_to(writer)
    }

    /// Restore a book from a snapshot.
    pub fn load<R: Read>(reader: R) -> StorageResult<Self> {
        Snapshot::read_from(reader)?.into_book()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
