//! Survey records: run information, tie-on point, initial survey data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{check_decimal, check_len, check_required, HoleSection};
use crate::geodetic::{Qualification, ReadingStatus};
use crate::storage::Record;

/// One survey run on a job.
///
/// `survey_run_in` and `minimum_id` are copied from the hole section when
/// the run is saved; values supplied by the client are overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInfo {
    #[serde(default)]
    pub survey_info_id: u64,
    pub run_name: String,
    pub job_number: String,
    pub run_number: i64,
    pub type_of_tool: u64,
    pub survey_type: u64,
    pub hole_section: u64,
    #[serde(default)]
    pub survey_run_in: String,
    #[serde(default)]
    pub minimum_id: String,
    pub north_reference: String,
    pub survey_calculation_method: String,
    pub geodetic_system: String,
    pub map_zone: String,
    pub geodetic_datum: String,
    pub start_depth: i64,
    pub tag_depth: i64,
    pub proposal_direction: i64,
}

impl SurveyInfo {
    pub fn inherit_from(&mut self, section: &HoleSection) {
        self.survey_run_in.clone_from(&section.survey_run_in);
        self.minimum_id.clone_from(&section.minimum_id);
    }
}

impl Record for SurveyInfo {
    const TABLE: &'static str = "task_survey_info";
    const LABEL: &'static str = "survey info";

    fn id(&self) -> u64 {
        self.survey_info_id
    }

    fn set_id(&mut self, id: u64) {
        self.survey_info_id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_required(&mut errors, "run_name", &self.run_name);
        check_len(&mut errors, "run_name", &self.run_name, 3);
        for (field, value) in [
            ("north_reference", &self.north_reference),
            ("survey_calculation_method", &self.survey_calculation_method),
            ("geodetic_system", &self.geodetic_system),
            ("map_zone", &self.map_zone),
            ("geodetic_datum", &self.geodetic_datum),
        ] {
            check_len(&mut errors, field, value, 255);
        }
        errors
    }
}

/// Tie-on reference point anchoring the directional survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieOn {
    #[serde(default)]
    pub id: u64,
    pub job_number: String,
    pub measured_depth: i64,
    pub true_vertical_depth: i64,
    pub inclination: i64,
    pub latitude: i64,
    pub azimuth: i64,
    pub departure: i64,
}

impl Record for TieOn {
    const TABLE: &'static str = "task_survey_tie_on_info";
    const LABEL: &'static str = "tie-on";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Header grouping the initial survey readings of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyHeader {
    #[serde(default)]
    pub id: u64,
    pub job_number: String,
    pub survey_type: u64,
    pub survey_date: NaiveDate,
}

impl Record for SurveyHeader {
    const TABLE: &'static str = "task_survey_initial_data_header";
    const LABEL: &'static str = "survey header";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for a survey header; dated on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSurveyHeader {
    pub job_number: String,
    pub survey_type: u64,
}

impl NewSurveyHeader {
    pub fn into_header(self, survey_date: NaiveDate) -> SurveyHeader {
        SurveyHeader {
            id: 0,
            job_number: self.job_number,
            survey_type: self.survey_type,
            survey_date,
        }
    }
}

/// A raw survey-tool reading submitted against a header.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyReading {
    pub depth: i64,
    #[serde(alias = "Inc")]
    pub inc: f64,
    #[serde(alias = "AzG")]
    pub azg: f64,
    pub g_t: f64,
    pub w_t: f64,
}

impl SurveyReading {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        // inc < 1000 and g_t < 10000; the rest follow their columns
        check_decimal(&mut errors, "inc", self.inc, 1e3);
        check_decimal(&mut errors, "azg", self.azg, 1e3);
        check_decimal(&mut errors, "g_t", self.g_t, 1e4);
        check_decimal(&mut errors, "w_t", self.w_t, 1e3);
        errors
    }
}

/// A stored reading with its qualification against the well's bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDetail {
    #[serde(default)]
    pub id: u64,
    pub job_number: String,
    pub header: u64,
    pub depth: i64,
    pub inc: f64,
    pub azg: f64,
    pub g_t: f64,
    pub w_t: f64,
    pub g_t_status: ReadingStatus,
    pub w_t_status: ReadingStatus,
    pub status: ReadingStatus,
    pub g_t_difference: f64,
    pub w_t_difference: f64,
}

impl SurveyDetail {
    pub fn new(header: &SurveyHeader, reading: SurveyReading, qualification: Qualification) -> Self {
        Self {
            id: 0,
            job_number: header.job_number.clone(),
            header: header.id,
            depth: reading.depth,
            inc: reading.inc,
            azg: reading.azg,
            g_t: reading.g_t,
            w_t: reading.w_t,
            g_t_status: qualification.g_t_status,
            w_t_status: qualification.w_t_status,
            status: qualification.status,
            g_t_difference: qualification.g_t_difference,
            w_t_difference: qualification.w_t_difference,
        }
    }
}

impl Record for SurveyDetail {
    const TABLE: &'static str = "task_survey_initial_data_detail";
    const LABEL: &'static str = "survey detail";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Header with its readings in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyHeaderWithDetails {
    #[serde(flatten)]
    pub header: SurveyHeader,
    pub details: Vec<SurveyDetail>,
}
