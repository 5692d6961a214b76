//! Job records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{check_len, check_required, Employee};
use crate::storage::Record;

/// A survey job. Keyed by its job number rather than an auto id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_number: String,
    pub location: String,
    /// Employee id (internal key, not the badge number).
    pub assign_to: u64,
    pub customer: u64,
    /// Rig id.
    pub rig_number: u64,
    pub unit_of_measure: u64,
    pub estimated_date: DateTime<Utc>,
    pub service: u64,
    pub job_created_date: DateTime<Utc>,
    pub job_assign_date: DateTime<Utc>,
}

/// Request body for creating a job. Creation and assignment dates are
/// stamped by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub job_number: String,
    pub location: String,
    pub assign_to: u64,
    pub customer: u64,
    pub rig_number: u64,
    pub unit_of_measure: u64,
    pub estimated_date: DateTime<Utc>,
    pub service: u64,
}

impl NewJob {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "job_number", &self.job_number);
        check_len(&mut errors, "job_number", &self.job_number, 255);
        check_len(&mut errors, "location", &self.location, 255);
        errors
    }

    pub fn into_job(self, now: DateTime<Utc>) -> Job {
        Job {
            job_number: self.job_number,
            location: self.location,
            assign_to: self.assign_to,
            customer: self.customer,
            rig_number: self.rig_number,
            unit_of_measure: self.unit_of_measure,
            estimated_date: self.estimated_date,
            service: self.service,
            job_created_date: now,
            job_assign_date: now,
        }
    }
}

/// Client-side job information captured on arrival at the rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default)]
    pub id: u64,
    pub job_number: String,
    pub client_rep: String,
    pub arrival_date: NaiveDate,
    pub well_id: i64,
    pub well_name: String,
    pub estimated_date: DateTime<Utc>,
}

impl Record for JobInfo {
    const TABLE: &'static str = "task_job_info";
    const LABEL: &'static str = "job info";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_len(&mut errors, "client_rep", &self.client_rep, 255);
        check_required(&mut errors, "well_name", &self.well_name);
        check_len(&mut errors, "well_name", &self.well_name, 255);
        errors
    }
}

/// Request body for job info; `arrival_date` is the creation date.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJobInfo {
    pub job_number: String,
    pub client_rep: String,
    pub well_id: i64,
    pub well_name: String,
    pub estimated_date: DateTime<Utc>,
}

impl NewJobInfo {
    pub fn into_info(self, arrival_date: NaiveDate) -> JobInfo {
        JobInfo {
            id: 0,
            job_number: self.job_number,
            client_rep: self.client_rep,
            arrival_date,
            well_id: self.well_id,
            well_name: self.well_name,
            estimated_date: self.estimated_date,
        }
    }
}

/// Job info joined with the fields it inherits from its job.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub info: JobInfo,
    pub service: u64,
    pub rig: u64,
    pub customer: u64,
    pub unit_of_measure: u64,
    pub job_created_date: DateTime<Utc>,
    pub job_assign_date: DateTime<Utc>,
    pub location: String,
}

impl JobDetail {
    pub fn new(info: JobInfo, job: &Job) -> Self {
        Self {
            info,
            service: job.service,
            rig: job.rig_number,
            customer: job.customer,
            unit_of_measure: job.unit_of_measure,
            job_created_date: job.job_created_date,
            job_assign_date: job.job_assign_date,
            location: job.location.clone(),
        }
    }
}

/// Employee with every job assigned to them.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeAssignments {
    pub emp_id: String,
    pub emp_name: String,
    pub emp_short_name: String,
    pub emp_designation: String,
    pub jobs_assigned: Vec<Job>,
}

impl EmployeeAssignments {
    pub fn new(employee: Employee, jobs_assigned: Vec<Job>) -> Self {
        Self {
            emp_id: employee.emp_id,
            emp_name: employee.emp_name,
            emp_short_name: employee.emp_short_name,
            emp_designation: employee.emp_designation,
            jobs_assigned,
        }
    }
}
