//! redb-based persistence for venue and selection state
//!
//! # Table
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `state` | blob key | JSON bytes | Venue and selection snapshots |
//!
//! Two independent keys are used: `venueData` holds the full venue and
//! `selectedSeats` holds the array of currently selected seat snapshots.
//! Persistence is best-effort and purely local; there is only ever one
//! writer, so no conflict resolution exists.
//!
//! A malformed stored blob is logged and treated as absent — the caller
//! falls back to the default in-memory state instead of crashing.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::venue::Venue;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::selection::Selection;

/// Single state table: key = blob name, value = JSON bytes
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("state");

/// Key under which the full venue is stored
pub const VENUE_KEY: &str = "venueData";
/// Key under which the selected seat snapshots are stored
pub const SELECTION_KEY: &str = "selectedSeats";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Venue/selection state store backed by redb
#[derive(Clone)]
pub struct StateStore {
    db: Arc<Database>,
}

impl StateStore {
    /// Open or create the database at the given path.
    ///
    /// redb commits are durable as soon as `commit()` returns, so the
    /// store survives an abrupt shutdown in a consistent state.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and demos).
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    // ========== Raw blob operations ==========

    fn put_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(key, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn save_blob<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.put_bytes(key, &bytes)?;
        tracing::debug!(key, bytes = bytes.len(), "State blob saved");
        Ok(())
    }

    /// Load and deserialize a blob. A missing key and a malformed blob are
    /// both reported as `None`; the malformed case is logged, never fatal.
    fn load_blob<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(key)? {
            Some(value) => match serde_json::from_slice(value.value()) {
                Ok(parsed) => Ok(Some(parsed)),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Stored blob is malformed, treating as absent");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    fn clear(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }

    // ========== Typed accessors ==========

    pub fn save_venue(&self, venue: &Venue) -> StorageResult<()> {
        self.save_blob(VENUE_KEY, venue)
    }

    pub fn load_venue(&self) -> StorageResult<Option<Venue>> {
        self.load_blob(VENUE_KEY)
    }

    pub fn save_selection(&self, selection: &Selection) -> StorageResult<()> {
        self.save_blob(SELECTION_KEY, selection)
    }

    pub fn load_selection(&self) -> StorageResult<Option<Selection>> {
        self.load_blob(SELECTION_KEY)
    }

    /// Remove both stored blobs. From the caller's point of view this is
    /// the atomic "forget everything" used by a full reset.
    pub fn clear_all(&self) -> StorageResult<()> {
        self.clear(VENUE_KEY)?;
        self.clear(SELECTION_KEY)?;
        tracing::debug!("State store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::venue::{SeatStatus, default_venue};

    #[test]
    fn test_venue_round_trip() {
        let store = StateStore::open_in_memory().unwrap();
        assert!(store.load_venue().unwrap().is_none());

        let mut venue = default_venue();
        venue.seat_mut("A-1-01").unwrap().status = SeatStatus::Reserved;
        store.save_venue(&venue).unwrap();

        let restored = store.load_venue().unwrap().unwrap();
        assert_eq!(restored, venue);
        assert_eq!(
            restored.seat("A-1-01").unwrap().status,
            SeatStatus::Reserved
        );
    }

    #[test]
    fn test_selection_round_trip() {
        let store = StateStore::open_in_memory().unwrap();
        assert!(store.load_selection().unwrap().is_none());

        let venue = default_venue();
        let mut selection = Selection::new();
        selection.add(venue.seat("A-1-01").unwrap().clone());
        selection.add(venue.seat("A-1-02").unwrap().clone());
        store.save_selection(&selection).unwrap();

        let restored = store.load_selection().unwrap().unwrap();
        assert_eq!(restored, selection);
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn test_selection_blob_is_a_json_array_of_seats() {
        let store = StateStore::open_in_memory().unwrap();
        let venue = default_venue();
        let mut selection = Selection::new();
        selection.add(venue.seat("A-1-01").unwrap().clone());
        store.save_selection(&selection).unwrap();

        // The persisted layout is an array of full seat snapshots
        let read_txn = store.db.begin_read().unwrap();
        let table = read_txn.open_table(STATE_TABLE).unwrap();
        let bytes = table.get(SELECTION_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_slice(bytes.value()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "A-1-01");
        assert_eq!(value[0]["priceTier"], 1);
    }

    #[test]
    fn test_malformed_blob_is_treated_as_absent() {
        let store = StateStore::open_in_memory().unwrap();
        store.put_bytes(VENUE_KEY, b"{not valid json").unwrap();
        assert!(store.load_venue().unwrap().is_none());

        store.put_bytes(SELECTION_KEY, b"42").unwrap();
        assert!(store.load_selection().unwrap().is_none());
    }

    #[test]
    fn test_clear_all_removes_both_keys() {
        let store = StateStore::open_in_memory().unwrap();
        store.save_venue(&default_venue()).unwrap();
        store.save_selection(&Selection::new()).unwrap();

        store.clear_all().unwrap();
        assert!(store.load_venue().unwrap().is_none());
        assert!(store.load_selection().unwrap().is_none());
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.redb");

        {
            let store = StateStore::open(&path).unwrap();
            store.save_venue(&default_venue()).unwrap();
        }

        let store = StateStore::open(&path).unwrap();
        let venue = store.load_venue().unwrap().unwrap();
        assert_eq!(venue.venue_id, "arena-01");
    }
}
