//! Survey info, tie-on and survey data endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use super::{json_body, respond, respond_created, ApiState};
use crate::types::{
    NewSurveyHeader, SurveyDetail, SurveyHeader, SurveyInfo, SurveyReading, TieOn,
};

/// GET /api/v1/survey-info
pub async fn list_survey_info(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<SurveyInfo>())
}

/// POST /api/v1/survey-info - run-in and minimum ID come from the hole section
pub async fn create_survey_info(
    State(state): State<ApiState>,
    payload: Result<Json<SurveyInfo>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(info) => respond_created(state.registry.create_survey_info(info)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/survey-info/:id
pub async fn get_survey_info(State(state): State<ApiState>, Path(id): Path<u64>) -> Response {
    respond(state.registry.get::<SurveyInfo>(id))
}

/// GET /api/v1/tie-ons
pub async fn list_tie_ons(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<TieOn>())
}

/// POST /api/v1/tie-ons
pub async fn create_tie_on(
    State(state): State<ApiState>,
    payload: Result<Json<TieOn>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(tie_on) => respond_created(state.registry.create_tie_on(tie_on)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/jobs/:job_number/tie-ons
pub async fn tie_ons_for_job(
    State(state): State<ApiState>,
    Path(job_number): Path<String>,
) -> Response {
    respond(state.registry.tie_ons_for_job(&job_number))
}

/// GET /api/v1/survey-headers
pub async fn list_headers(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<SurveyHeader>())
}

/// POST /api/v1/survey-headers - dated today
pub async fn create_header(
    State(state): State<ApiState>,
    payload: Result<Json<NewSurveyHeader>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(header) => respond_created(state.registry.create_survey_header(header)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/survey-headers/:id - header with its readings
pub async fn get_header(State(state): State<ApiState>, Path(id): Path<u64>) -> Response {
    respond(state.registry.header_with_details(id))
}

/// POST /api/v1/survey-headers/:id/details - store a qualified reading
pub async fn submit_reading(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    payload: Result<Json<SurveyReading>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(reading) => respond_created(state.registry.submit_reading(id, reading)),
        Err(rejection) => rejection,
    }
}

/// GET /api/v1/survey-details
pub async fn list_details(State(state): State<ApiState>) -> Response {
    respond(state.registry.list::<SurveyDetail>())
}
