//! Well information

use serde::{Deserialize, Serialize};

use super::{check_decimal, check_len};
use crate::geodetic::{DerivedGeodeticValues, WellLocation};
use crate::storage::Record;

/// Surface location and reference data for a well on a job.
///
/// Request bodies may use the legacy column names (`latitude_1`, `GLE`,
/// `RKB`, `ref_elivation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellInfo {
    #[serde(default)]
    pub well_info_id: u64,
    pub well_id: i64,
    pub job_number: String,
    #[serde(alias = "latitude_1")]
    pub latitude_degrees: i32,
    #[serde(alias = "latitude_2")]
    pub latitude_minutes: i32,
    #[serde(alias = "latitude_3")]
    pub latitude_seconds: f64,
    #[serde(alias = "longitude_1")]
    pub longitude_degrees: i32,
    #[serde(alias = "longitude_2")]
    pub longitude_minutes: i32,
    #[serde(alias = "longitude_3")]
    pub longitude_seconds: f64,
    pub northing: f64,
    pub easting: f64,
    pub well_type: u64,
    pub expected_well_temp: i64,
    pub expected_wellbore_inclination: i64,
    pub central_meridian: i64,
    #[serde(alias = "GLE")]
    pub ground_level_elevation: f64,
    #[serde(alias = "RKB")]
    pub rkb: f64,
    #[serde(alias = "ref_elivation")]
    pub ref_elevation: String,
    pub ref_datum: String,
}

impl WellInfo {
    pub fn location(&self) -> WellLocation {
        WellLocation {
            latitude_degrees: self.latitude_degrees,
            latitude_minutes: self.latitude_minutes,
            latitude_seconds: self.latitude_seconds,
            longitude_degrees: self.longitude_degrees,
            longitude_minutes: self.longitude_minutes,
            longitude_seconds: self.longitude_seconds,
            ground_level_elevation: self.ground_level_elevation,
        }
    }

    pub fn derived(&self) -> DerivedGeodeticValues {
        self.location().derive()
    }
}

impl Record for WellInfo {
    const TABLE: &'static str = "task_well_info";
    const LABEL: &'static str = "well info";

    fn id(&self) -> u64 {
        self.well_info_id
    }

    fn set_id(&mut self, id: u64) {
        self.well_info_id = id;
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        check_decimal(&mut errors, "latitude_seconds", self.latitude_seconds, 1e2);
        check_decimal(&mut errors, "longitude_seconds", self.longitude_seconds, 1e2);
        check_decimal(&mut errors, "northing", self.northing, 1e6);
        check_decimal(&mut errors, "easting", self.easting, 1e6);
        check_decimal(&mut errors, "ground_level_elevation", self.ground_level_elevation, 1e4);
        check_decimal(&mut errors, "rkb", self.rkb, 1e1);
        check_len(&mut errors, "ref_elevation", &self.ref_elevation, 255);
        check_len(&mut errors, "ref_datum", &self.ref_datum, 255);
        errors
    }
}

/// A well as returned by the API: stored fields plus derived values,
/// recomputed on every read.
#[derive(Debug, Clone, Serialize)]
pub struct WellView {
    #[serde(flatten)]
    pub well: WellInfo,
    #[serde(flatten)]
    pub derived: DerivedGeodeticValues,
}

impl From<WellInfo> for WellView {
    fn from(well: WellInfo) -> Self {
        let derived = well.derived();
        Self { well, derived }
    }
}
