//! API route definitions
//!
//! - /api/v1/health, /api/v1/config - service status
//! - /api/v1/{services,customers,units,...} - master tables
//! - /api/v1/jobs, /api/v1/job-info - jobs and their details
//! - /api/v1/wells, /api/v1/geodetic/derive - wells and derived values
//! - /api/v1/survey-* , /api/v1/tie-ons - survey data

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, jobs, masters, status, surveys, wells, ApiState};
use crate::types::{
    Customer, Employee, HoleSection, Rig, ServiceType, SurveyType, Tool, UnitOfMeasure, WellType,
};

/// Create all `/api/v1` routes
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(status::health))
        .route("/config", get(status::get_config))
        // Master tables
        .route("/services", get(masters::list::<ServiceType>).post(masters::create::<ServiceType>))
        .route("/services/:id", get(masters::get::<ServiceType>))
        .route("/customers", get(masters::list::<Customer>).post(masters::create::<Customer>))
        .route("/customers/:id", get(masters::get::<Customer>))
        .route("/units", get(masters::list::<UnitOfMeasure>).post(masters::create::<UnitOfMeasure>))
        .route("/units/:id", get(masters::get::<UnitOfMeasure>))
        .route("/rigs", get(masters::list::<Rig>).post(masters::create::<Rig>))
        .route("/rigs/:id", get(masters::get::<Rig>))
        .route("/employees", get(masters::list::<Employee>).post(masters::create::<Employee>))
        // Badge lookup before the parameterized route to avoid capture
        .route("/employees/by-emp-id/:emp_id", get(masters::employee_assignments))
        .route("/employees/:id", get(masters::get::<Employee>))
        .route("/well-types", get(masters::list::<WellType>).post(masters::create::<WellType>))
        .route("/well-types/:id", get(masters::get::<WellType>))
        .route("/tools", get(masters::list::<Tool>).post(masters::create::<Tool>))
        .route("/tools/:id", get(masters::get::<Tool>))
        .route("/hole-sections", get(masters::list::<HoleSection>).post(masters::create::<HoleSection>))
        .route("/hole-sections/:id", get(masters::get::<HoleSection>))
        .route("/survey-types", get(masters::list::<SurveyType>).post(masters::create::<SurveyType>))
        .route("/survey-types/:id", get(masters::get::<SurveyType>))
        // Jobs
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/:job_number", get(jobs::get_job))
        .route("/jobs/:job_number/details", get(jobs::job_details))
        .route("/jobs/:job_number/wells", get(wells::wells_for_job))
        .route("/jobs/:job_number/tie-ons", get(surveys::tie_ons_for_job))
        .route("/job-info", get(jobs::list_job_info).post(jobs::create_job_info))
        // Wells
        .route("/wells", get(wells::list_wells).post(wells::create_well))
        .route("/wells/:id", get(wells::get_well))
        .route("/geodetic/derive", post(wells::derive))
        // Survey data
        .route("/survey-info", get(surveys::list_survey_info).post(surveys::create_survey_info))
        .route("/survey-info/:id", get(surveys::get_survey_info))
        .route("/tie-ons", get(surveys::list_tie_ons).post(surveys::create_tie_on))
        .route("/survey-headers", get(surveys::list_headers).post(surveys::create_header))
        .route("/survey-headers/:id", get(surveys::get_header))
        .route("/survey-headers/:id/details", post(surveys::submit_reading))
        .route("/survey-details", get(surveys::list_details))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Health endpoint at root level
pub fn root_routes(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(status::health))
        .with_state(state)
}
