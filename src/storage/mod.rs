//! Snapshot persistence for address books.
//!
//! A snapshot is a versioned JSON document listing every contact's name,
//! phones, and birthday. `SnapshotStore` is the seam between the book and
//! wherever its snapshot lives.

mod file_store;
mod snapshot;
mod traits;

pub use file_store::FileSnapshotStore;
pub use snapshot::{Snapshot, SnapshotRecord, SNAPSHOT_VERSION};
pub use traits::SnapshotStore;
