//! API route handlers
//!
//! Handlers translate HTTP to [`Registry`] calls and map every
//! [`RegistryError`] onto the error envelope:
//!
//! | error | status | code |
//! |---|---|---|
//! | Validation, InvalidNumericInput | 400 | BAD_REQUEST |
//! | MissingReference | 400 | MISSING_REFERENCE |
//! | Duplicate | 409 | CONFLICT |
//! | NotFound | 404 | NOT_FOUND |
//! | OutOfPhysicalRange | 422 | OUT_OF_PHYSICAL_RANGE |
//! | Storage | 500 | INTERNAL_ERROR |

pub mod jobs;
pub mod masters;
pub mod status;
pub mod surveys;
pub mod wells;

use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::ServiceConfig;
use crate::geodetic::GeodeticError;
use crate::registry::{Registry, RegistryError};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub registry: Registry,
    /// Configuration the service was started with
    pub config: Arc<ServiceConfig>,
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(registry: Registry, config: ServiceConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

// ============================================================================
// Response helpers
// ============================================================================

/// Map a registry error onto the error envelope.
pub(crate) fn error_response(err: RegistryError) -> Response {
    match err {
        RegistryError::Validation(errors) => {
            warn!(errors = ?errors, "Rejected invalid record");
            ApiErrorResponse::validation(errors)
        }
        RegistryError::MissingReference { .. } => {
            warn!("{}", err);
            ApiErrorResponse::missing_reference(err.to_string())
        }
        RegistryError::Duplicate { .. } => ApiErrorResponse::conflict(err.to_string()),
        RegistryError::NotFound { .. } => ApiErrorResponse::not_found(err.to_string()),
        RegistryError::Geodetic(GeodeticError::InvalidNumericInput { .. }) => {
            warn!("{}", err);
            ApiErrorResponse::bad_request(err.to_string())
        }
        RegistryError::Geodetic(GeodeticError::OutOfPhysicalRange { .. }) => {
            warn!("{}", err);
            ApiErrorResponse::out_of_physical_range(err.to_string())
        }
        RegistryError::Storage(e) => {
            error!("Storage failure: {}", e);
            ApiErrorResponse::internal(format!("storage failure: {e}"))
        }
    }
}

/// 200 with the value, or the mapped error.
pub(crate) fn respond<T: Serialize>(result: Result<T, RegistryError>) -> Response {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(e) => error_response(e),
    }
}

/// 201 with the stored record, or the mapped error.
pub(crate) fn respond_created<T: Serialize>(result: Result<T, RegistryError>) -> Response {
    match result {
        Ok(data) => ApiResponse::created(data),
        Err(e) => error_response(e),
    }
}

/// Unwrap a JSON body, turning extractor rejections into a 400 envelope.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiErrorResponse::bad_request(rejection.body_text())
    })
}

/// Fallback for unknown `/api/v1` paths.
pub async fn not_found() -> Response {
    ApiErrorResponse::not_found("no such endpoint")
}
