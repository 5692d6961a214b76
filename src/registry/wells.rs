//! Well info

use super::{ensure_valid, Registry, RegistryError, Result};
use crate::storage::Record;
use crate::types::{WellInfo, WellType, WellView};

impl Registry {
    /// Store a well and return it with its derived values.
    ///
    /// Non-finite coordinates are rejected before column checks. The
    /// physical-range check runs only when enabled on the registry.
    pub fn create_well(&self, well: WellInfo) -> Result<WellView> {
        let location = well.location();
        location.check_numeric()?;
        ensure_valid(well.validate())?;
        if self.enforce_physical_range {
            location.check_physical_range()?;
        }
        self.require_job(&well.job_number)?;
        self.require::<WellType>(well.well_type)?;

        let stored = self.store.table::<WellInfo>()?.insert(well)?;
        tracing::info!(
            table = WellInfo::TABLE,
            id = stored.well_info_id,
            job_number = %stored.job_number,
            "Created well info"
        );
        Ok(WellView::from(stored))
    }

    pub fn get_well(&self, well_info_id: u64) -> Result<WellView> {
        self.get::<WellInfo>(well_info_id).map(WellView::from)
    }

    pub fn list_wells(&self) -> Result<Vec<WellView>> {
        Ok(self.list::<WellInfo>()?.into_iter().map(WellView::from).collect())
    }

    pub fn wells_for_job(&self, job_number: &str) -> Result<Vec<WellView>> {
        self.get_job(job_number)?;
        let wells = self
            .store
            .table::<WellInfo>()?
            .filter(|well| well.job_number == job_number)?;
        Ok(wells.into_iter().map(WellView::from).collect())
    }

    /// Most recently created well for a job; readings are qualified against it.
    pub(super) fn reference_well(&self, job_number: &str) -> Result<WellInfo> {
        self.store
            .table::<WellInfo>()?
            .find_last(|well| well.job_number == job_number)?
            .ok_or_else(|| RegistryError::MissingReference {
                label: WellInfo::LABEL,
                key: format!("for job {job_number}"),
            })
    }
}
