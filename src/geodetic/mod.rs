//! Geodetic Derived Fields
//!
//! Converts a well's stored degree/minute/second location into decimal
//! coordinates and derives the two reference bands used to accept or reject
//! raw survey-tool readings:
//! - W(t): local magnetic field component, ±3 band
//! - G(t): local gravity field component, ±10 band
//!
//! All calculation is pure and stateless. Validation of the inputs belongs to
//! the record layer; the optional physical-range check is exposed separately.

pub mod calculator;
pub mod qualification;

pub use calculator::{
    gravity_field_component, magnetic_field_component, round_to, to_decimal_degrees,
    DerivedGeodeticValues, ReferenceBand, WellLocation,
};
pub use qualification::{qualify_reading, Qualification, ReadingStatus};

/// Errors raised around the calculator. The calculator itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeodeticError {
    #[error("invalid numeric input for {field}")]
    InvalidNumericInput { field: String },
    #[error("coordinate out of physical range (lat {latitude}, lon {longitude})")]
    OutOfPhysicalRange { latitude: f64, longitude: f64 },
}
