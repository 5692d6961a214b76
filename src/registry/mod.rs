//! Survey Registry
//!
//! Service layer over [`Store`]: validates records, enforces references
//! between tables, stamps server-side dates and qualifies survey readings.
//! Split by area:
//! - jobs: jobs, job info, employee assignments
//! - wells: well info and its derived values
//! - surveys: survey info, tie-ons, headers and readings

mod jobs;
mod surveys;
mod wells;

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

use crate::geodetic::GeodeticError;
use crate::storage::{Record, StorageError, Store};
use crate::types::{
    Customer, Employee, HoleSection, Rig, ServiceType, SurveyType, Tool, UnitOfMeasure, WellType,
};

/// Error type for registry operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("{label} {key} does not exist")]
    MissingReference { label: &'static str, key: String },
    #[error("{label} {key} already exists")]
    Duplicate { label: &'static str, key: String },
    #[error("{label} {key} not found")]
    NotFound { label: &'static str, key: String },
    #[error(transparent)]
    Geodetic(#[from] GeodeticError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Reference tables that can be created directly through the API.
pub trait Master: Record {}

impl Master for ServiceType {}
impl Master for Customer {}
impl Master for UnitOfMeasure {}
impl Master for Rig {}
impl Master for Employee {}
impl Master for WellType {}
impl Master for Tool {}
impl Master for HoleSection {}
impl Master for SurveyType {}

/// Row counts reported by the health endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordCounts {
    pub jobs: usize,
    pub job_info: usize,
    pub wells: usize,
    pub survey_info: usize,
    pub tie_ons: usize,
    pub survey_headers: usize,
    pub survey_details: usize,
}

#[derive(Clone)]
pub struct Registry {
    store: Store,
    enforce_physical_range: bool,
    /// Serializes check-then-insert on unique columns.
    unique_writes: Arc<Mutex<()>>,
}

impl Registry {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            enforce_physical_range: false,
            unique_writes: Arc::new(Mutex::new(())),
        }
    }

    /// Reject well locations outside ±90° latitude / ±180° longitude.
    #[must_use]
    pub fn with_physical_range_check(mut self, enabled: bool) -> Self {
        self.enforce_physical_range = enabled;
        self
    }

    pub fn enforces_physical_range(&self) -> bool {
        self.enforce_physical_range
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a master record. Any id in the request is replaced.
    pub fn create_master<T: Master>(&self, record: T) -> Result<T> {
        ensure_valid(record.validate())?;
        let table = self.store.table::<T>()?;

        let stored = match record.unique_key() {
            Some(key) => {
                let _guard = self.unique_writes.lock().unwrap_or_else(PoisonError::into_inner);
                let taken = table
                    .find_last(|existing| existing.unique_key().as_deref() == Some(key.as_str()))?
                    .is_some();
                if taken {
                    tracing::warn!(table = T::TABLE, key = %key, "Rejected duplicate record");
                    return Err(RegistryError::Duplicate { label: T::LABEL, key });
                }
                table.insert(record)?
            }
            None => table.insert(record)?,
        };

        tracing::info!(table = T::TABLE, id = stored.id(), "Created {}", T::LABEL);
        Ok(stored)
    }

    pub fn get<T: Record>(&self, id: u64) -> Result<T> {
        self.store.table::<T>()?.get(id)?.ok_or_else(|| RegistryError::NotFound {
            label: T::LABEL,
            key: id.to_string(),
        })
    }

    pub fn list<T: Record>(&self) -> Result<Vec<T>> {
        Ok(self.store.table::<T>()?.list()?)
    }

    pub fn counts(&self) -> Result<RecordCounts> {
        use crate::types::{JobInfo, SurveyDetail, SurveyHeader, SurveyInfo, TieOn, WellInfo};

        Ok(RecordCounts {
            jobs: self.store.jobs()?.count(),
            job_info: self.store.table::<JobInfo>()?.count(),
            wells: self.store.table::<WellInfo>()?.count(),
            survey_info: self.store.table::<SurveyInfo>()?.count(),
            tie_ons: self.store.table::<TieOn>()?.count(),
            survey_headers: self.store.table::<SurveyHeader>()?.count(),
            survey_details: self.store.table::<SurveyDetail>()?.count(),
        })
    }

    /// Fail with `MissingReference` unless row `id` of `T` exists.
    fn require<T: Record>(&self, id: u64) -> Result<()> {
        if self.store.table::<T>()?.contains(id)? {
            Ok(())
        } else {
            Err(RegistryError::MissingReference {
                label: T::LABEL,
                key: id.to_string(),
            })
        }
    }

    fn require_job(&self, job_number: &str) -> Result<()> {
        if self.store.jobs()?.contains(job_number)? {
            Ok(())
        } else {
            Err(RegistryError::MissingReference {
                label: "job",
                key: job_number.to_string(),
            })
        }
    }
}

fn ensure_valid(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RegistryError::Validation(errors))
    }
}
