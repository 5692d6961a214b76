//! Record Storage
//!
//! Persists every survey-tracking table in one sled database, one named tree
//! per table. Values are JSON; integer primary keys are big-endian u64 so
//! trees iterate in id order. Jobs use their job number as the key.
//!
//! Auto-increment ids live in a dedicated `sequences` tree and are advanced
//! with an atomic `update_and_fetch`, so each table counts from 1.
//!
//! sled holds an exclusive lock on the database file while a `Store` is
//! open, so a second process opening the same path fails in [`Store::open`].

mod jobs;
mod table;

pub use jobs::JobTable;
pub use table::Table;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Tree holding one counter per table.
const SEQUENCES_TREE: &str = "sequences";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// A row type with an auto-increment integer primary key.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// sled tree name (matches the legacy table name).
    const TABLE: &'static str;
    /// Human-readable name for error messages.
    const LABEL: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);

    /// Column-level checks run before insert. Returns every violation.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }

    /// Value that must be unique across the table, if any.
    fn unique_key(&self) -> Option<String> {
        None
    }
}

/// Handle to the survey database.
#[derive(Clone)]
pub struct Store {
    db: sled::Db,
    sequences: sled::Tree,
}

impl Store {
    /// Open or create the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path_ref = path.as_ref();
        let db = sled::open(path_ref)?;
        tracing::info!(path = %path_ref.display(), "Survey storage opened");
        Self::from_db(db)
    }

    /// In-memory database, discarded on drop.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        tracing::info!("Temporary survey storage opened");
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let sequences = db.open_tree(SEQUENCES_TREE)?;
        Ok(Self { db, sequences })
    }

    /// Typed handle to the tree for `T`.
    pub fn table<T: Record>(&self) -> Result<Table<T>, StorageError> {
        let tree = self.db.open_tree(T::TABLE)?;
        Ok(Table::new(tree, self.sequences.clone()))
    }

    pub fn jobs(&self) -> Result<JobTable, StorageError> {
        let tree = self.db.open_tree(JobTable::TABLE)?;
        Ok(JobTable::new(tree))
    }

    /// Remove every record and sequence, leaving an empty database.
    ///
    /// Returns the number of trees cleared.
    pub fn reset(&self) -> Result<usize, StorageError> {
        let names = self.db.tree_names();
        for name in &names {
            self.db.open_tree(name)?.clear()?;
        }
        self.db.flush()?;
        Ok(names.len())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    /// Get database size in bytes
    pub fn size_bytes(&self) -> u64 {
        self.db.size_on_disk().unwrap_or(0)
    }
}

/// Decode a big-endian u64 key or counter; malformed bytes read as 0.
pub(crate) fn decode_u64(bytes: &[u8]) -> u64 {
    <[u8; 8]>::try_from(bytes).map_or(0, u64::from_be_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_open_of_same_path_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("survey.db");

        let _held = Store::open(&path).unwrap();
        let err = Store::open(&path).err().unwrap();
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[test]
    fn test_reset_clears_rows_and_sequences() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("survey.db");
        let store = Store::open(&path).unwrap();

        let sequences = store.sequences.clone();
        sequences.insert("task_rig", 7u64.to_be_bytes().to_vec()).unwrap();
        store.db.open_tree("task_rig").unwrap().insert(b"k", b"v".to_vec()).unwrap();

        assert!(store.reset().unwrap() >= 2);
        assert!(store.db.open_tree("task_rig").unwrap().is_empty());
        assert!(store.sequences.is_empty());
    }
}
