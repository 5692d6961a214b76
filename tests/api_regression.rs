//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port.

use well_survey::api::{create_app, ApiState};
use well_survey::config::ServiceConfig;
use well_survey::{Registry, Store};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_app(enforce_physical_range: bool) -> Router {
    let store = Store::temporary().unwrap();
    let registry = Registry::new(store).with_physical_range_check(enforce_physical_range);
    let mut config = ServiceConfig::default();
    config.geodetic.enforce_physical_range = enforce_physical_range;
    create_app(ApiState::new(registry, config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

/// One row in every master table; all ids are 1.
async fn seed_masters(app: &Router) {
    let masters = [
        ("/api/v1/services", json!({"service_type": "Gyro Survey"})),
        ("/api/v1/customers", json!({"customer_name": "Desert Oil"})),
        ("/api/v1/units", json!({"unit_of_measure": "ft"})),
        ("/api/v1/rigs", json!({"rig_number": "R-17"})),
        (
            "/api/v1/employees",
            json!({
                "emp_id": "E100",
                "emp_name": "Amal Haddad",
                "emp_short_name": "AH",
                "emp_designation": "Survey Engineer"
            }),
        ),
        ("/api/v1/well-types", json!({"well_type": "Oil Producer"})),
        ("/api/v1/tools", json!({"type_of_tools": "Gyro"})),
        (
            "/api/v1/hole-sections",
            json!({"hole_section": "12 1/4", "survey_run_in": "Drill Pipe", "minimum_id": "2.25"}),
        ),
        ("/api/v1/survey-types", json!({"survey_types": "Initial"})),
    ];

    for (uri, body) in masters {
        let (status, v) = post(app, uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {uri} returned {status}: {v}");
        assert_eq!(v["meta"]["version"], "1");
    }
}

fn job_body(job_number: &str) -> Value {
    json!({
        "job_number": job_number,
        "location": "Block 7",
        "assign_to": 1,
        "customer": 1,
        "rig_number": 1,
        "unit_of_measure": 1,
        "estimated_date": "2025-03-01T08:00:00Z",
        "service": 1
    })
}

fn well_body(job_number: &str, latitude_degrees: i64) -> Value {
    json!({
        "well_id": 101,
        "job_number": job_number,
        "latitude_degrees": latitude_degrees,
        "latitude_minutes": 30,
        "latitude_seconds": 0.0,
        "longitude_degrees": 55,
        "longitude_minutes": 15,
        "longitude_seconds": 36.0,
        "northing": 282000.25,
        "easting": 425000.5,
        "well_type": 1,
        "expected_well_temp": 120,
        "expected_wellbore_inclination": 35,
        "central_meridian": 57,
        "ground_level_elevation": 12.5,
        "rkb": 9.5,
        "ref_elevation": "MSL",
        "ref_datum": "WGS84"
    })
}

/// Every list endpoint answers 200 on an empty database.
#[tokio::test]
async fn test_get_endpoints_return_200() {
    let app = create_test_app(false);

    let endpoints = [
        "/health",
        "/api/v1/health",
        "/api/v1/config",
        "/api/v1/services",
        "/api/v1/customers",
        "/api/v1/units",
        "/api/v1/rigs",
        "/api/v1/employees",
        "/api/v1/well-types",
        "/api/v1/tools",
        "/api/v1/hole-sections",
        "/api/v1/survey-types",
        "/api/v1/jobs",
        "/api/v1/job-info",
        "/api/v1/wells",
        "/api/v1/survey-info",
        "/api/v1/tie-ons",
        "/api/v1/survey-headers",
        "/api/v1/survey-details",
    ];

    for endpoint in endpoints {
        let (status, v) = get(&app, endpoint).await;
        assert_eq!(status, StatusCode::OK, "GET {endpoint} returned {status}");
        assert!(v.get("data").is_some(), "GET {endpoint} missing envelope");
    }
}

#[tokio::test]
async fn test_health_reports_counts() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;

    let (status, v) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["status"], "ok");
    assert_eq!(v["data"]["service"], "well-survey");
    assert_eq!(v["data"]["records"]["jobs"], 1);
    assert_eq!(v["data"]["records"]["wells"], 0);
}

#[tokio::test]
async fn test_survey_workflow() {
    let app = create_test_app(false);
    seed_masters(&app).await;

    let (status, job) = post(&app, "/api/v1/jobs", job_body("JOB-001")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(job["data"]["job_created_date"].is_string());

    let (status, well) = post(&app, "/api/v1/wells", well_body("JOB-001", 25)).await;
    assert_eq!(status, StatusCode::CREATED, "{well}");
    assert_eq!(well["data"]["well_info_id"], 1);
    assert_eq!(well["data"]["north_coordinate"], 25.5);
    assert_eq!(well["data"]["east_coordinate"], 55.26);
    assert_eq!(well["data"]["w_t"], 13.58);
    assert_eq!(well["data"]["max_w_t"], 16.58);
    assert_eq!(well["data"]["g_t"], 998.56631);

    let (status, header) = post(
        &app,
        "/api/v1/survey-headers",
        json!({"job_number": "JOB-001", "survey_type": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let header_id = header["data"]["id"].as_u64().unwrap();

    let reading_uri = format!("/api/v1/survey-headers/{header_id}/details");
    let (status, detail) = post(
        &app,
        &reading_uri,
        json!({"depth": 1200, "Inc": 2.5, "AzG": 118.0, "g_t": 1000.0, "w_t": 14.0}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{detail}");
    assert_eq!(detail["data"]["status"], "PASS");
    assert_eq!(detail["data"]["g_t_difference"], 1.43);
    assert_eq!(detail["data"]["w_t_difference"], 0.42);

    let (_, failed) = post(
        &app,
        &reading_uri,
        json!({"depth": 1300, "inc": 2.7, "azg": 119.0, "g_t": 985.0, "w_t": 14.0}),
    )
    .await;
    assert_eq!(failed["data"]["g_t_status"], "FAIL");
    assert_eq!(failed["data"]["w_t_status"], "PASS");
    assert_eq!(failed["data"]["status"], "FAIL");

    let (status, with_details) = get(&app, &format!("/api/v1/survey-headers/{header_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_details["data"]["job_number"], "JOB-001");
    assert_eq!(with_details["data"]["details"].as_array().unwrap().len(), 2);

    let (_, wells) = get(&app, "/api/v1/jobs/JOB-001/wells").await;
    assert_eq!(wells["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_job_details_and_assignments() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;

    let (status, info) = post(
        &app,
        "/api/v1/job-info",
        json!({
            "job_number": "JOB-001",
            "client_rep": "R. Singh",
            "well_id": 12,
            "well_name": "Falcon-3",
            "estimated_date": "2025-03-02T08:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{info}");
    assert!(info["data"]["arrival_date"].is_string());

    let (_, details) = get(&app, "/api/v1/jobs/JOB-001/details").await;
    assert_eq!(details["data"][0]["well_name"], "Falcon-3");
    assert_eq!(details["data"][0]["location"], "Block 7");

    let (status, employee) = get(&app, "/api/v1/employees/by-emp-id/E100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employee["data"]["jobs_assigned"][0]["job_number"], "JOB-001");

    let (status, by_id) = get(&app, "/api/v1/employees/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["data"]["emp_id"], "E100");
}

#[tokio::test]
async fn test_survey_info_and_tie_ons() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;

    let (status, info) = post(
        &app,
        "/api/v1/survey-info",
        json!({
            "run_name": "R1",
            "job_number": "JOB-001",
            "run_number": 1,
            "type_of_tool": 1,
            "survey_type": 1,
            "hole_section": 1,
            "north_reference": "Grid",
            "survey_calculation_method": "Minimum Curvature",
            "geodetic_system": "UTM",
            "map_zone": "40N",
            "geodetic_datum": "WGS84",
            "start_depth": 0,
            "tag_depth": 1500,
            "proposal_direction": 270
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{info}");
    assert_eq!(info["data"]["survey_run_in"], "Drill Pipe");

    let (status, _) = post(
        &app,
        "/api/v1/tie-ons",
        json!({
            "job_number": "JOB-001",
            "measured_depth": 500,
            "true_vertical_depth": 498,
            "inclination": 3,
            "latitude": 12,
            "azimuth": 140,
            "departure": 8
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, tie_ons) = get(&app, "/api/v1/jobs/JOB-001/tie-ons").await;
    assert_eq!(tie_ons["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_codes() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;

    // Duplicate natural key
    let (status, v) = post(&app, "/api/v1/jobs", job_body("JOB-001")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(v["error"]["code"], "CONFLICT");

    // Foreign key to nothing
    let (status, v) = post(&app, "/api/v1/wells", well_body("JOB-404", 25)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "MISSING_REFERENCE");

    // Column limit
    let (status, v) = post(&app, "/api/v1/units", json!({"unit_of_measure": "metres"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "BAD_REQUEST");
    assert_eq!(v["error"]["details"].as_array().unwrap().len(), 1);

    // Malformed body
    let (status, v) = post(&app, "/api/v1/rigs", json!({"rig": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "BAD_REQUEST");

    // Unknown ids and paths
    let (status, v) = get(&app, "/api/v1/wells/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"]["code"], "NOT_FOUND");
    let (status, _) = get(&app, "/api/v1/no-such-thing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reading_without_well_is_missing_reference() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;
    post(&app, "/api/v1/survey-headers", json!({"job_number": "JOB-001", "survey_type": 1})).await;

    let (status, v) = post(
        &app,
        "/api/v1/survey-headers/1/details",
        json!({"depth": 100, "inc": 0.5, "azg": 10.0, "g_t": 998.0, "w_t": 13.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v["error"]["code"], "MISSING_REFERENCE");
}

#[tokio::test]
async fn test_legacy_field_names_accepted() {
    let app = create_test_app(false);
    seed_masters(&app).await;
    post(&app, "/api/v1/jobs", job_body("JOB-001")).await;

    let body = json!({
        "well_id": 7, "job_number": "JOB-001",
        "latitude_1": 10, "latitude_2": 30, "latitude_3": 0.0,
        "longitude_1": 50, "longitude_2": 0, "longitude_3": 0.0,
        "northing": 1.0, "easting": 2.0, "well_type": 1,
        "expected_well_temp": 90, "expected_wellbore_inclination": 10,
        "central_meridian": 51, "GLE": 5.0, "RKB": 8.0,
        "ref_elivation": "MSL", "ref_datum": "WGS84"
    });
    let (status, v) = post(&app, "/api/v1/wells", body).await;
    assert_eq!(status, StatusCode::CREATED, "{v}");
    assert_eq!(v["data"]["north_coordinate"], 10.5);
    assert_eq!(v["data"]["rkb"], 8.0);
}

#[tokio::test]
async fn test_geodetic_derive() {
    let app = create_test_app(false);
    let equator = json!({
        "latitude_degrees": 0, "latitude_minutes": 0, "latitude_seconds": 0.0,
        "longitude_degrees": 0, "longitude_minutes": 0, "longitude_seconds": 0.0,
        "ground_level_elevation": 0.0
    });

    let (status, v) = post(&app, "/api/v1/geodetic/derive", equator).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["w_t"], 15.04);
    assert_eq!(v["data"]["max_w_t"], 18.04);
    assert_eq!(v["data"]["min_w_t"], 12.04);
    assert_eq!(v["data"]["g_t"], 997.59335);
}

#[tokio::test]
async fn test_physical_range_strict_mode() {
    let over_pole = json!({
        "latitude_degrees": 120, "latitude_minutes": 0, "latitude_seconds": 0.0,
        "longitude_degrees": 0, "longitude_minutes": 0, "longitude_seconds": 0.0,
        "ground_level_elevation": 0.0
    });

    let permissive = create_test_app(false);
    let (status, v) = post(&permissive, "/api/v1/geodetic/derive", over_pole.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["data"]["w_t"], -7.52);

    let strict = create_test_app(true);
    let (status, v) = post(&strict, "/api/v1/geodetic/derive", over_pole).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(v["error"]["code"], "OUT_OF_PHYSICAL_RANGE");

    seed_masters(&strict).await;
    post(&strict, "/api/v1/jobs", job_body("JOB-001")).await;
    let (status, _) = post(&strict, "/api/v1/wells", well_body("JOB-001", 120)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
