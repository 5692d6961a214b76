//! Sexagesimal conversion and latitude-dependent reference fields
//!
//! Formulas:
//! - decimal = deg + ((sec / 60 + min) / 60)
//! - W(t) = 15.041 × cos(lat)
//! - G(t) = [9.780327 × (1 + 0.0053024·sin²(lat) − 0.0000058·sin²(2·lat)) − 3.086e-6 × GLE] × 102
//!
//! The sexagesimal sum is exact decimal arithmetic (`rust_decimal`) rounded
//! half-to-even; values only become `f64` for the trigonometry.
//!
//! Every function here is pure. Nothing is range-checked; see
//! [`WellLocation::check_physical_range`] for the opt-in check.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::GeodeticError;

// ============================================================================
// Constants
// ============================================================================

/// Equatorial magnetic field strength used for W(t).
pub const MAGNETIC_EQUATORIAL_STRENGTH: f64 = 15.041;

/// Acceptance band half-width around W(t).
pub const MAGNETIC_TOLERANCE: f64 = 3.0;

/// Normal gravity at the equator (m/s²).
pub const GRAVITY_AT_EQUATOR: f64 = 9.780_327;

/// sin²(lat) coefficient of the international gravity formula.
pub const GRAVITY_SIN2_LAT: f64 = 0.005_302_4;

/// sin²(2·lat) coefficient of the international gravity formula.
pub const GRAVITY_SIN2_TWO_LAT: f64 = 0.000_005_8;

/// Free-air gradient applied per unit of ground level elevation.
pub const FREE_AIR_GRADIENT: f64 = 3.086e-6;

/// Scale from m/s² to the tool's G(t) reporting units.
pub const GRAVITY_SCALE: f64 = 102.0;

/// Acceptance band half-width around G(t).
pub const GRAVITY_TOLERANCE: f64 = 10.0;

/// Fractional digits kept on converted coordinates.
pub const COORDINATE_DECIMALS: u32 = 8;

/// Fractional digits kept on W(t) and on both band edges.
pub const BAND_DECIMALS: usize = 2;

/// Fractional digits kept on G(t).
pub const GRAVITY_DECIMALS: usize = 5;

// ============================================================================
// Rounding
// ============================================================================

/// Round to a fixed number of fractional digits.
///
/// Goes through the shortest correctly-rounded decimal rendering, so the
/// result is the `f64` closest to the printed value rather than the product
/// of a scale-and-truncate.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

// ============================================================================
// Operations
// ============================================================================

/// Combine a degree/minute/second triple into decimal degrees.
///
/// Hemisphere is not encoded: `degrees` must already carry the sign for
/// southern or western coordinates. A negative `degrees` with positive
/// minutes/seconds is taken literally (`-10° 30′` gives `-9.5`).
///
/// Exact ties at the eighth digit round to even: `-3° 19′ 20.83953″` is
/// `-2.677544575`, which becomes `-2.67754458`.
pub fn to_decimal_degrees(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    exact_decimal_degrees(degrees, minutes, seconds)
        .and_then(|value| value.to_string().parse().ok())
        .unwrap_or_else(|| {
            let value = f64::from(degrees) + ((seconds / 60.0 + f64::from(minutes)) / 60.0);
            round_to(value, COORDINATE_DECIMALS as usize)
        })
}

/// `None` when `seconds` has no decimal form (non-finite or beyond ~7.9e28).
fn exact_decimal_degrees(degrees: i32, minutes: i32, seconds: f64) -> Option<Decimal> {
    // Shortest round-trip rendering, so 20.83953 stays 20.83953
    let seconds: Decimal = seconds.to_string().parse().ok()?;
    let sixty = Decimal::from(60);

    let fraction = seconds
        .checked_div(sixty)?
        .checked_add(Decimal::from(minutes))?
        .checked_div(sixty)?;
    let value = Decimal::from(degrees).checked_add(fraction)?;

    Some(value.round_dp_with_strategy(COORDINATE_DECIMALS, RoundingStrategy::MidpointNearestEven))
}

/// A reference value with its symmetric acceptance band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBand {
    pub value: f64,
    pub max: f64,
    pub min: f64,
}

impl ReferenceBand {
    fn around(value: f64, tolerance: f64) -> Self {
        Self {
            value,
            max: round_to(value + tolerance, BAND_DECIMALS),
            min: round_to(value - tolerance, BAND_DECIMALS),
        }
    }

    /// Inclusive on both edges.
    pub fn contains(&self, reading: f64) -> bool {
        reading >= self.min && reading <= self.max
    }
}

/// Estimate the local magnetic field component W(t) from latitude.
///
/// Defined for every real input. Latitudes beyond ±90° still produce a
/// value; cosine is even, so `lat` and `-lat` agree.
pub fn magnetic_field_component(north_degrees: f64) -> ReferenceBand {
    let w_t = round_to(
        MAGNETIC_EQUATORIAL_STRENGTH * north_degrees.to_radians().cos(),
        BAND_DECIMALS,
    );
    ReferenceBand::around(w_t, MAGNETIC_TOLERANCE)
}

/// Estimate the local gravity field component G(t) from latitude and
/// ground level elevation.
pub fn gravity_field_component(north_degrees: f64, ground_level_elevation: f64) -> ReferenceBand {
    let lat = north_degrees.to_radians();
    let two_lat = (2.0 * north_degrees).to_radians();

    let normal_gravity = GRAVITY_AT_EQUATOR
        * (1.0 + GRAVITY_SIN2_LAT * lat.sin().powi(2) - GRAVITY_SIN2_TWO_LAT * two_lat.sin().powi(2));
    let free_air = FREE_AIR_GRADIENT * ground_level_elevation;

    let g_t = round_to((normal_gravity - free_air) * GRAVITY_SCALE, GRAVITY_DECIMALS);
    ReferenceBand::around(g_t, GRAVITY_TOLERANCE)
}

// ============================================================================
// Value types
// ============================================================================

/// Stored location fields of a well, as consumed by the calculator.
///
/// Accepts the legacy column names (`latitude_1`, `GLE`, ...) on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WellLocation {
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
    #[serde(alias = "GLE")]
    pub ground_level_elevation: f64,
}

impl WellLocation {
    pub fn north_coordinate(&self) -> f64 {
        to_decimal_degrees(
            self.latitude_degrees,
            self.latitude_minutes,
            self.latitude_seconds,
        )
    }

    pub fn east_coordinate(&self) -> f64 {
        to_decimal_degrees(
            self.longitude_degrees,
            self.longitude_minutes,
            self.longitude_seconds,
        )
    }

    /// Compute every derived value. Recomputed on each call.
    pub fn derive(&self) -> DerivedGeodeticValues {
        let north = self.north_coordinate();
        let magnetic = magnetic_field_component(north);
        let gravity = gravity_field_component(north, self.ground_level_elevation);

        DerivedGeodeticValues {
            north_coordinate: north,
            east_coordinate: self.east_coordinate(),
            w_t: magnetic.value,
            max_w_t: magnetic.max,
            min_w_t: magnetic.min,
            g_t: gravity.value,
            max_g_t: gravity.max,
            min_g_t: gravity.min,
        }
    }

    /// Reject NaN and infinite decimal components.
    pub fn check_numeric(&self) -> Result<(), GeodeticError> {
        let decimals = [
            ("latitude_seconds", self.latitude_seconds),
            ("longitude_seconds", self.longitude_seconds),
            ("ground_level_elevation", self.ground_level_elevation),
        ];
        match decimals.iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(GeodeticError::InvalidNumericInput {
                field: (*field).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Reject |lat| > 90 or |lon| > 180 after conversion.
    ///
    /// Not applied by [`derive`](Self::derive); callers opt in.
    pub fn check_physical_range(&self) -> Result<(), GeodeticError> {
        let latitude = self.north_coordinate();
        let longitude = self.east_coordinate();
        if latitude.abs() > 90.0 || longitude.abs() > 180.0 {
            return Err(GeodeticError::OutOfPhysicalRange {
                latitude,
                longitude,
            });
        }
        Ok(())
    }
}

/// Read-only values derived from a [`WellLocation`]. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGeodeticValues {
    pub north_coordinate: f64,
    pub east_coordinate: f64,
    pub w_t: f64,
    pub max_w_t: f64,
    pub min_w_t: f64,
    pub g_t: f64,
    pub max_g_t: f64,
    pub min_g_t: f64,
}

impl DerivedGeodeticValues {
    pub fn magnetic_band(&self) -> ReferenceBand {
        ReferenceBand {
            value: self.w_t,
            max: self.max_w_t,
            min: self.min_w_t,
        }
    }

    pub fn gravity_band(&self) -> ReferenceBand {
        ReferenceBand {
            value: self.g_t,
            max: self.max_g_t,
            min: self.min_g_t,
        }
    }
}
