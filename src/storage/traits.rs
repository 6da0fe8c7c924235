use crate::book::AddressBook;
use crate::error::StorageResult;

/// Storage for a single address book snapshot.
///
/// Implementations decide where the snapshot lives (a file, memory in tests).
/// A store that holds no snapshot yet loads as an empty book.
pub trait SnapshotStore {
    /// Restore the stored book, or an empty one if nothing has been saved.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with the full contents of `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
