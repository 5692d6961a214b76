//! Job and job info endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::{json_body, respond, respond_created, ApiState};
use crate::types::{JobInfo, NewJob, NewJobInfo};

/// GET /api/v1/jobs
pub async fn list_jobs(State(state): State<ApiState>) -> Response {
    respond(state.registry.list_jobs())
}

/// POST /api/v1/jobs - created and assigned dates are set server-side
pub async fn create_job(
    State(state): State<ApiState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(job) => respond_created(state.registry.create_job(job)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/jobs/:job_number
pub async fn get_job(State(state): State<ApiState>, Path(job_number): Path<String>) -> Response {
    respond(state.registry.get_job(&job_number))
}

/// GET /api/v1/jobs/:job_number/details
pub async fn job_details(
    State(state): State<ApiState>,
    Path(job_number): Path<String>,
) -> Response {
    respond(state.registry.job_details(&job_number))
}

/// GET /api/v1/job-info
pub async fn list_job_info(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<JobInfo>())
}

/// POST /api/v1/job-info - arrival date is today
pub async fn create_job_info(
    State(state): State<ApiState>,
    payload: Result<Json<NewJobInfo>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(info) => respond_created(state.registry.create_job_info(info)),
        Err(rejection) => rejection,
    }
}
