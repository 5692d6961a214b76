//! Well Survey: job tracking for directional survey services
//!
//! Record-keeping backend for survey jobs, with the geodetic reference
//! fields used to qualify raw survey-tool readings.
//!
//! ## Architecture
//!
//! - **Geodetic**: DMS conversion, W(t) and G(t) reference bands, reading qualification
//! - **Types**: master tables and job/well/survey records with column checks
//! - **Storage**: sled trees with per-table id sequences
//! - **Registry**: reference checks, server-stamped dates, qualified readings
//! - **API**: axum create/read endpoints under `/api/v1`

pub mod api;
pub mod config;
pub mod geodetic;
pub mod registry;
pub mod storage;
pub mod types;

pub use config::ServiceConfig;

pub use geodetic::{
    gravity_field_component, magnetic_field_component, to_decimal_degrees, DerivedGeodeticValues,
    GeodeticError, ReadingStatus, WellLocation,
};

pub use registry::{Registry, RegistryError};

pub use storage::{StorageError, Store};
