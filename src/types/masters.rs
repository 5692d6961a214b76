//! Master / reference tables

use serde::{Deserialize, Serialize};

use super::{check_len, check_required};
use crate::storage::Record;

/// Service offered on a job (e.g. "Gyro Survey").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(default)]
    pub id: u64,
    pub service_type: String,
}

impl Record for ServiceType {
    const TABLE: &'static str = "task_service_master";
    const LABEL: &'static str = "service type";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "service_type", &self.service_type);
        check_len(&mut errors, "service_type", &self.service_type, 255);
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub customer_id: u64,
    pub customer_name: String,
}

impl Record for Customer {
    const TABLE: &'static str = "task_customer_master";
    const LABEL: &'static str = "customer";

    fn id(&self) -> u64 {
        self.customer_id
    }

    fn set_id(&mut self, id: u64) {
        self.customer_id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "customer_name", &self.customer_name);
        check_len(&mut errors, "customer_name", &self.customer_name, 255);
        errors
    }
}

/// Depth unit for a job, e.g. "ft" or "m".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    #[serde(default)]
    pub id: u64,
    pub unit_of_measure: String,
}

impl Record for UnitOfMeasure {
    const TABLE: &'static str = "task_unit_of_measure";
    const LABEL: &'static str = "unit of measure";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "unit_of_measure", &self.unit_of_measure);
        check_len(&mut errors, "unit_of_measure", &self.unit_of_measure, 3);
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rig {
    #[serde(default)]
    pub id: u64,
    pub rig_number: String,
}

impl Record for Rig {
    const TABLE: &'static str = "task_rig_master";
    const LABEL: &'static str = "rig";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "rig_number", &self.rig_number);
        check_len(&mut errors, "rig_number", &self.rig_number, 255);
        errors
    }
}

/// Field engineer or office staff. `emp_id` is the company badge number
/// and is unique; `id` is the internal key jobs reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: u64,
    pub emp_id: String,
    pub emp_name: String,
    pub emp_short_name: String,
    pub emp_designation: String,
}

impl Record for Employee {
    const TABLE: &'static str = "task_employee_master";
    const LABEL: &'static str = "employee";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "emp_id", &self.emp_id);
        check_required(&mut errors, "emp_name", &self.emp_name);
        for (field, value) in [
            ("emp_id", &self.emp_id),
            ("emp_name", &self.emp_name),
            ("emp_short_name", &self.emp_short_name),
            ("emp_designation", &self.emp_designation),
        ] {
            check_len(&mut errors, field, value, 255);
        }
        errors
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.emp_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellType {
    #[serde(default)]
    pub id: u64,
    pub well_type: String,
}

impl Record for WellType {
    const TABLE: &'static str = "task_well_type_master";
    const LABEL: &'static str = "well type";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "well_type", &self.well_type);
        check_len(&mut errors, "well_type", &self.well_type, 255);
        errors
    }
}

/// Survey tool type (e.g. "MWD", "Gyro").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default)]
    pub id: u64,
    pub type_of_tools: String,
}

impl Record for Tool {
    const TABLE: &'static str = "task_tools_master";
    const LABEL: &'static str = "tool";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "type_of_tools", &self.type_of_tools);
        check_len(&mut errors, "type_of_tools", &self.type_of_tools, 255);
        errors
    }
}

/// Hole section with the run-in string and minimum ID that every survey
/// run in this section inherits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSection {
    #[serde(default)]
    pub id: u64,
    pub hole_section: String,
    pub survey_run_in: String,
    pub minimum_id: String,
}

impl Record for HoleSection {
    const TABLE: &'static str = "task_holesection_master";
    const LABEL: &'static str = "hole section";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "hole_section", &self.hole_section);
        check_len(&mut errors, "hole_section", &self.hole_section, 255);
        check_len(&mut errors, "survey_run_in", &self.survey_run_in, 255);
        check_len(&mut errors, "minimum_id", &self.minimum_id, 100);
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyType {
    #[serde(default)]
    pub id: u64,
    pub survey_types: String,
}

impl Record for SurveyType {
    const TABLE: &'static str = "task_survey_types_master";
    const LABEL: &'static str = "survey type";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "survey_types", &self.survey_types);
        check_len(&mut errors, "survey_types", &self.survey_types, 255);
        errors
    }
}
