//! API integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::{Datelike, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use fleet_inventory_server::{config::AppConfig, create_router, AppState};

/// Router over an empty store
fn empty_app() -> Router {
    let mut config = AppConfig::default();
    config.store.seed_sample_data = false;
    create_router(AppState::new(config))
}

/// Router over the demo fleet
fn seeded_app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn vehicle_payload(reg_no: &str) -> Value {
    json!({
        "regNo": reg_no,
        "make": "Tata",
        "model": "Ultra 1518",
        "mfgYear": 2019,
        "regDate": "2019-03-15",
        "entityName": "City Transport",
        "runningSite": "Route 42A",
        "engineNo": "ENG001234",
        "chassisNo": "CHS001234",
        "seatCapacity": 45,
        "vehicleType": "Bus",
        "acStatus": 1
    })
}

fn sl_nos(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("Expected array")
        .iter()
        .map(|v| v["slNo"].as_i64().expect("slNo"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_store_size() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicles"], 5);
}

#[tokio::test]
async fn test_list_seeded_vehicles_newest_first() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/vehicles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sl_nos(&body), vec![5, 4, 3, 2, 1]);
}

#[tokio::test]
async fn test_create_get_update_delete() {
    let app = empty_app();

    // Create
    let (status, created) =
        send(&app, Method::POST, "/api/vehicles", Some(vehicle_payload("KA-01-AA-0001"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slNo"], 1);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["acStatus"], 1);

    // Get
    let (status, fetched) = send(&app, Method::GET, "/api/vehicles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Empty update is a no-op
    let (status, unchanged) = send(&app, Method::PUT, "/api/vehicles/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, created);

    // Partial update
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/vehicles/1",
        Some(json!({ "seatCapacity": 99, "slNo": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["seatCapacity"], 99);
    assert_eq!(updated["slNo"], 1);
    let mut expected = created.clone();
    expected["seatCapacity"] = json!(99);
    assert_eq!(updated, expected);

    // Delete
    let (status, body) = send(&app, Method::DELETE, "/api/vehicles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Vehicle deleted successfully" }));

    let (status, body) = send(&app, Method::GET, "/api/vehicles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Vehicle not found" }));

    let (status, _) = send(&app, Method::DELETE, "/api/vehicles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Serials are not reused
    let (_, next) =
        send(&app, Method::POST, "/api/vehicles", Some(vehicle_payload("KA-01-AA-0002"))).await;
    assert_eq!(next["slNo"], 2);
}

#[tokio::test]
async fn test_create_defaults() {
    let app = empty_app();
    let mut payload = vehicle_payload("KA-01-AA-0001");
    let object = payload.as_object_mut().unwrap();
    object.remove("acStatus");
    object.remove("runningSite");

    let (status, created) = send(&app, Method::POST, "/api/vehicles", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["acStatus"], 0);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["runningSite"], Value::Null);
}

#[tokio::test]
async fn test_create_validation_failure() {
    let app = empty_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/vehicles",
        Some(json!({ "regNo": "KA-01-AA-0001", "seatCapacity": 0, "vehicleType": "Truck" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    let fields: Vec<_> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect();
    assert!(fields.contains(&"seatCapacity".to_string()));
    assert!(fields.contains(&"vehicleType".to_string()));
    assert!(fields.contains(&"make".to_string()));

    let (_, list) = send(&app, Method::GET, "/api/vehicles", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = empty_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vehicles")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_update_missing_and_invalid() {
    let app = empty_app();

    let (status, body) =
        send(&app, Method::PUT, "/api/vehicles/7", Some(json!({ "seatCapacity": 9 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vehicle not found");

    let (status, body) =
        send(&app, Method::PUT, "/api/vehicles/7", Some(json!({ "acStatus": 3 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "acStatus");
}

#[tokio::test]
async fn test_non_numeric_serial_is_bad_request() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/api/vehicles/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_filter_type_and_status() {
    let app = seeded_app();
    let (status, body) =
        send(&app, Method::GET, "/api/vehicles?vehicleType=Bus&status=Active", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sl_nos(&body), vec![1]);
}

#[tokio::test]
async fn test_filter_seat_capacity_gte() {
    let app = seeded_app();
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/vehicles?seatCapacity=10&seatCapacityType=gte",
        None,
    )
    .await;
    assert_eq!(sl_nos(&body), vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn test_filter_ac_status_zero() {
    let app = seeded_app();
    let (_, body) = send(&app, Method::GET, "/api/vehicles?acStatus=0", None).await;
    assert_eq!(sl_nos(&body), vec![4, 3]);
}

#[tokio::test]
async fn test_filter_age_window() {
    let app = empty_app();
    let year = Utc::now().year();

    let mut four = vehicle_payload("AGE-4");
    four["mfgYear"] = json!(year - 4);
    let mut six = vehicle_payload("AGE-6");
    six["mfgYear"] = json!(year - 6);
    send(&app, Method::POST, "/api/vehicles", Some(four)).await;
    send(&app, Method::POST, "/api/vehicles", Some(six)).await;

    let (_, body) = send(&app, Method::GET, "/api/vehicles?minAge=3&maxAge=5", None).await;
    assert_eq!(sl_nos(&body), vec![1]);
}

#[tokio::test]
async fn test_out_of_range_mfg_year_is_rejected() {
    let app = seeded_app();
    for year in [i64::from(i32::MIN), 999, 10_000, i64::from(i32::MAX)] {
        let mut payload = vehicle_payload("YEAR-X");
        payload["mfgYear"] = json!(year);
        let (status, body) = send(&app, Method::POST, "/api/vehicles", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "mfgYear");

        let (status, body) =
            send(&app, Method::PUT, "/api/vehicles/1", Some(json!({ "mfgYear": year }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "mfgYear");
    }

    let (status, body) =
        send(&app, Method::GET, "/api/vehicles?status=Active&minAge=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sl_nos(&body), vec![5, 3, 2, 1]);
}

#[tokio::test]
async fn test_empty_running_site_is_stored_as_null() {
    let app = empty_app();
    let mut payload = vehicle_payload("KA-01-AA-0001");
    payload["runningSite"] = json!("");

    let (status, created) = send(&app, Method::POST, "/api/vehicles", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["runningSite"], Value::Null);
}

#[tokio::test]
async fn test_search_overrides_other_filters() {
    let app = seeded_app();
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/vehicles?search=tata&vehicleType=Winger&status=Inactive",
        None,
    )
    .await;
    // Both Tata vehicles, even though neither is a Winger
    assert_eq!(sl_nos(&body), vec![4, 1]);
}

#[tokio::test]
async fn test_empty_query_parameters_are_ignored() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/vehicles?vehicleType=&acStatus=&search=",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sl_nos(&body).len(), 5);
}

#[tokio::test]
async fn test_malformed_filter_is_validation_error() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::GET, "/api/vehicles?minAge=old", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "minAge");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = empty_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/vehicles"].is_object());
}
