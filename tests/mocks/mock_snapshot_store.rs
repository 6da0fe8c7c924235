use address_book::error::{StorageError, StorageResult};
use address_book::{AddressBook, SnapshotStore};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock snapshot store for testing.
///
/// Keeps the serialized snapshot in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotStore {
    bytes: Arc<Mutex<Option<Vec<u8>>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshotStore {
    /// Create a store holding no snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `book`.
    pub fn with_book(book: &AddressBook) -> Self {
        let store = Self::new();
        let mut buffer = Vec::new();
        book.save(&mut buffer).unwrap();
        *store.bytes.lock().unwrap() = Some(buffer);
        store
    }

    /// Create a store pre-seeded with raw snapshot text.
    pub fn with_raw(text: &str) -> Self {
        let store = Self::new();
        *store.bytes.lock().unwrap() = Some(text.as_bytes().to_vec());
        store
    }

    /// Make every following `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The stored snapshot text, if anything was saved.
    pub fn raw(&self) -> Option<String> {
        self.bytes
            .lock()
            .unwrap()
            .as_ref()
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        match self.bytes.lock().unwrap().as_deref() {
            Some(bytes) => AddressBook::load(bytes),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }

        let mut buffer = Vec::new();
        book.save(&mut buffer)?;
        *self.bytes.lock().unwrap() = Some(buffer);
        Ok(())
    }
}
