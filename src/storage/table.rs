//! Typed access to one auto-id table.

use std::marker::PhantomData;

use super::{decode_u64, Record, StorageError};

/// A sled tree holding JSON-encoded `T` rows keyed by big-endian id.
pub struct Table<T> {
    tree: sled::Tree,
    sequences: sled::Tree,
    _row: PhantomData<fn() -> T>,
}

impl<T: Record> Table<T> {
    pub(super) fn new(tree: sled::Tree, sequences: sled::Tree) -> Self {
        Self {
            tree,
            sequences,
            _row: PhantomData,
        }
    }

    /// Assign the next id and store the row. Returns the stored row.
    pub fn insert(&self, mut record: T) -> Result<T, StorageError> {
        let id = self.next_id()?;
        record.set_id(id);

        let value = serde_json::to_vec(&record)?;
        self.tree.insert(id.to_be_bytes(), value)?;

        tracing::debug!(table = T::TABLE, id, "Record stored");
        Ok(record)
    }

    fn next_id(&self) -> Result<u64, StorageError> {
        let updated = self.sequences.update_and_fetch(T::TABLE, |old| {
            let next = old.map_or(0, decode_u64) + 1;
            Some(next.to_be_bytes().to_vec())
        })?;

        updated
            .map(|bytes| decode_u64(&bytes))
            .ok_or_else(|| StorageError::Database(format!("sequence for {} vanished", T::TABLE)))
    }

    pub fn get(&self, id: u64) -> Result<Option<T>, StorageError> {
        match self.tree.get(id.to_be_bytes())? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    pub fn contains(&self, id: u64) -> Result<bool, StorageError> {
        Ok(self.tree.contains_key(id.to_be_bytes())?)
    }

    /// All rows in id order. Rows that fail to decode are skipped.
    pub fn list(&self) -> Result<Vec<T>, StorageError> {
        self.filter(|_| true)
    }

    /// Rows matching `predicate`, in id order.
    pub fn filter<F>(&self, predicate: F) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = Vec::new();

        for item in self.tree.iter() {
            let (key, value) = item?;
            match serde_json::from_slice::<T>(&value) {
                Ok(row) if predicate(&row) => rows.push(row),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        table = T::TABLE,
                        id = decode_u64(&key),
                        "Failed to deserialize stored record: {}",
                        e
                    );
                }
            }
        }

        Ok(rows)
    }

    /// Most recently inserted row matching `predicate`. Rows that fail to
    /// decode are skipped.
    pub fn find_last<F>(&self, predicate: F) -> Result<Option<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        for item in self.tree.iter().rev() {
            let (key, value) = item?;
            match serde_json::from_slice::<T>(&value) {
                Ok(row) if predicate(&row) => return Ok(Some(row)),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(
                        table = T::TABLE,
                        id = decode_u64(&key),
                        "Failed to deserialize stored record: {}",
                        e
                    );
                }
            }
        }
        Ok(None)
    }

    pub fn count(&self) -> usize {
        self.tree.len()
    }
}
