//! Filesystem-backed snapshot store.

use super::traits::SnapshotStore;
use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Keeps the snapshot in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store for the snapshot file at `path`.
    ///
    /// Nothing is read or created until `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the next snapshot is written to before it replaces `path`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_snapshot(path: &Path, book: &AddressBook) -> StorageResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        book.save(&mut writer)?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    path = %self.path.display(),
                    "No snapshot found, starting with an empty address book"
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book = AddressBook::load(BufReader::new(file))?;
        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Loaded address book snapshot"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target and swap it in, so a failed write leaves the
        // previous snapshot intact.
        let temp_path = self.temp_path();
        if let Err(e) = Self::write_snapshot(&temp_path, book) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        fs::rename(&temp_path, &self.path)?;
        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "Saved address book snapshot"
        );
        Ok(())
    }
}
