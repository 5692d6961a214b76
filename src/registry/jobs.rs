//! Jobs, job info and employee assignments

use chrono::Utc;

use super::{ensure_valid, Registry, RegistryError, Result};
use crate::storage::Record;
use crate::types::{
    Customer, Employee, EmployeeAssignments, Job, JobDetail, JobInfo, NewJob, NewJobInfo, Rig,
    ServiceType, UnitOfMeasure,
};

impl Registry {
    /// Create a job. Created and assigned dates are set to now.
    pub fn create_job(&self, new_job: NewJob) -> Result<Job> {
        ensure_valid(new_job.validate())?;
        self.require::<ServiceType>(new_job.service)?;
        self.require::<Employee>(new_job.assign_to)?;
        self.require::<Customer>(new_job.customer)?;
        self.require::<Rig>(new_job.rig_number)?;
        self.require::<UnitOfMeasure>(new_job.unit_of_measure)?;

        let job = new_job.into_job(Utc::now());
        if !self.store.jobs()?.insert_new(&job)? {
            tracing::warn!(job_number = %job.job_number, "Rejected duplicate job");
            return Err(RegistryError::Duplicate {
                label: "job",
                key: job.job_number,
            });
        }

        tracing::info!(table = "task_create_job", job_number = %job.job_number, "Created job");
        Ok(job)
    }

    pub fn get_job(&self, job_number: &str) -> Result<Job> {
        self.store.jobs()?.get(job_number)?.ok_or_else(|| RegistryError::NotFound {
            label: "job",
            key: job_number.to_string(),
        })
    }

    pub fn list_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.store.jobs()?.list()?)
    }

    /// Create job info for an existing job; `arrival_date` is today.
    pub fn create_job_info(&self, new_info: NewJobInfo) -> Result<JobInfo> {
        self.require_job(&new_info.job_number)?;
        let info = new_info.into_info(Utc::now().date_naive());
        ensure_valid(info.validate())?;

        let stored = self.store.table::<JobInfo>()?.insert(info)?;
        tracing::info!(table = JobInfo::TABLE, id = stored.id, job_number = %stored.job_number, "Created job info");
        Ok(stored)
    }

    /// Job info rows for a job, joined with the job's own fields.
    pub fn job_details(&self, job_number: &str) -> Result<Vec<JobDetail>> {
        let job = self.get_job(job_number)?;
        let infos = self
            .store
            .table::<JobInfo>()?
            .filter(|info| info.job_number == job_number)?;
        Ok(infos.into_iter().map(|info| JobDetail::new(info, &job)).collect())
    }

    /// Employee looked up by badge number, with every job assigned to them.
    pub fn employee_assignments(&self, emp_id: &str) -> Result<EmployeeAssignments> {
        let employee = self
            .store
            .table::<Employee>()?
            .find_last(|e| e.emp_id == emp_id)?
            .ok_or_else(|| RegistryError::NotFound {
                label: Employee::LABEL,
                key: emp_id.to_string(),
            })?;

        let jobs = self
            .list_jobs()?
            .into_iter()
            .filter(|job| job.assign_to == employee.id)
            .collect();
        Ok(EmployeeAssignments::new(employee, jobs))
    }
}
