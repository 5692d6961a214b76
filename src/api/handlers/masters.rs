//! Master table endpoints, generic over the record type

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::{json_body, respond, respond_created, ApiState};
use crate::registry::Master;

/// GET /api/v1/{master}
pub async fn list<T: Master>(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<T>())
}

/// GET /api/v1/{master}/:id
pub async fn get<T: Master>(State(state): State<ApiState>, Path(id): Path<u64>) -> Response {
    respond(state.registry.get::<T>(id))
}

/// POST /api/v1/{master}
pub async fn create<T: Master>(
    State(state): State<ApiState>,
    payload: Result<Json<T>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(record) => respond_created(state.registry.create_master(record)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/employees/by-emp-id/:emp_id
pub async fn employee_assignments(
    State(state): State<ApiState>,
    Path(emp_id): Path<String>,
) -> Response {
    respond(state.registry.employee_assignments(&emp_id))
}
