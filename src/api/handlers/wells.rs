//! Well endpoints and the stateless geodetic calculator

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::{json_body, respond, respond_created, ApiState};
use crate::geodetic::{DerivedGeodeticValues, WellLocation};
use crate::registry::RegistryError;
use crate::types::WellInfo;

/// GET /api/v1/wells
pub async fn list_wells(State(state): State<ApiState>) -> Response {
    respond(state.registry.list_wells())
}

/// POST /api/v1/wells - response carries the derived values
pub async fn create_well(
    State(state): State<ApiState>,
    payload: Result<Json<WellInfo>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(well) => respond_created(state.registry.create_well(well)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/wells/:id
pub async fn get_well(State(state): State<ApiState>, Path(id): Path<u64>) -> Response {
    respond(state.registry.get_well(id))
}

/// GET /api/v1/jobs/:job_number/wells
pub async fn wells_for_job(
    State(state): State<ApiState>,
    Path(job_number): Path<String>,
) -> Response {
    respond(state.registry.wells_for_job(&job_number))
}

/// POST /api/v1/geodetic/derive - derive values for a location without storing it
pub async fn derive(
    State(state): State<ApiState>,
    payload: Result<Json<WellLocation>, JsonRejection>,
) -> Response {
    let location = match json_body(payload) {
        Ok(location) => location,
        Err(rejection) => return rejection,
    };
    respond(derive_checked(&location, state.registry.enforces_physical_range()))
}

fn derive_checked(
    location: &WellLocation,
    enforce_physical_range: bool,
) -> Result<DerivedGeodeticValues, RegistryError> {
    location.check_numeric()?;
    if enforce_physical_range {
        location.check_physical_range()?;
    }
    Ok(location.derive())
}
