//! Service status endpoints: health, active configuration

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use super::{error_response, ApiState};
use crate::api::envelope::ApiResponse;
use crate::registry::RecordCounts;

/// Health response with per-table record counts
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub storage_bytes: u64,
    pub enforce_physical_range: bool,
    pub records: RecordCounts,
}

/// GET /health and /api/v1/health
pub async fn health(State(state): State<ApiState>) -> Response {
    let records = match state.registry.counts() {
        Ok(counts) => counts,
        Err(e) => return error_response(e),
    };

    ApiResponse::ok(HealthResponse {
        status: "ok",
        service: state.config.service.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        storage_bytes: state.registry.store().size_bytes(),
        enforce_physical_range: state.registry.enforces_physical_range(),
        records,
    })
}

/// GET /api/v1/config - the configuration the service started with
pub async fn get_config(State(state): State<ApiState>) -> Response {
    ApiResponse::ok(&*state.config)
}
