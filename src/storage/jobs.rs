//! Job table, keyed by job number.

use crate::types::Job;

use super::StorageError;

/// Jobs keyed by the UTF-8 bytes of their job number.
pub struct JobTable {
    tree: sled::Tree,
}

impl JobTable {
    pub const TABLE: &'static str = "task_create_job";

    pub(super) fn new(tree: sled::Tree) -> Self {
        Self { tree }
    }

    /// Store a job unless the job number is taken.
    ///
    /// Returns `false` without writing when a job with the same number
    /// already exists. The check and insert are one compare-and-swap.
    pub fn insert_new(&self, job: &Job) -> Result<bool, StorageError> {
        let value = serde_json::to_vec(job)?;
        let outcome = self
            .tree
            .compare_and_swap(job.job_number.as_bytes(), None as Option<&[u8]>, Some(value))?;

        if outcome.is_ok() {
            tracing::debug!(table = Self::TABLE, job_number = %job.job_number, "Job stored");
        }
        Ok(outcome.is_ok())
    }

    pub fn get(&self, job_number: &str) -> Result<Option<Job>, StorageError> {
        match self.tree.get(job_number.as_bytes())? {
            Some(value) => Ok(Some(serde_json::from_slice(&value)?)),
            None => Ok(None),
        }
    }

    pub fn contains(&self, job_number: &str) -> Result<bool, StorageError> {
        Ok(self.tree.contains_key(job_number.as_bytes())?)
    }

    /// Jobs ordered by job number.
    pub fn list(&self) -> Result<Vec<Job>, StorageError> {
        let mut jobs = Vec::new();
        for item in self.tree.iter() {
            let (key, value) = item?;
            match serde_json::from_slice::<Job>(&value) {
                Ok(job) => jobs.push(job),
                Err(e) => {
                    tracing::warn!(
                        job_number = %String::from_utf8_lossy(&key),
                        "Failed to deserialize stored job: {}",
                        e
                    );
                }
            }
        }
        Ok(jobs)
    }

    pub fn count(&self) -> usize {
        self.tree.len()
    }
}
