//! Survey reading qualification against a well's reference bands.

use serde::{Deserialize, Serialize};

use super::calculator::{round_to, DerivedGeodeticValues, BAND_DECIMALS};

/// Outcome of comparing one reading against its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReadingStatus {
    Pass,
    Fail,
}

impl ReadingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingStatus::Pass => "PASS",
            ReadingStatus::Fail => "FAIL",
        }
    }

    fn from_check(passed: bool) -> Self {
        if passed {
            ReadingStatus::Pass
        } else {
            ReadingStatus::Fail
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field status and signed deviation from the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub g_t_status: ReadingStatus,
    pub w_t_status: ReadingStatus,
    pub status: ReadingStatus,
    pub g_t_difference: f64,
    pub w_t_difference: f64,
}

/// Qualify a raw G(t)/W(t) reading pair.
///
/// Band edges are inclusive. The overall status passes only when both
/// fields pass. Differences are `reading - reference`, 2 fractional digits.
pub fn qualify_reading(reference: &DerivedGeodeticValues, g_t: f64, w_t: f64) -> Qualification {
    let g_t_status = ReadingStatus::from_check(reference.gravity_band().contains(g_t));
    let w_t_status = ReadingStatus::from_check(reference.magnetic_band().contains(w_t));
    let status = ReadingStatus::from_check(
        g_t_status == ReadingStatus::Pass && w_t_status == ReadingStatus::Pass,
    );

    Qualification {
        g_t_status,
        w_t_status,
        status,
        g_t_difference: round_to(g_t - reference.g_t, BAND_DECIMALS),
        w_t_difference: round_to(w_t - reference.w_t, BAND_DECIMALS),
    }
}
