use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use dayscore::server::{create_router, AppState};
use dayscore::{DayScore, PowerClient};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

/// Router whose archive client points at a dead local port, so no test ever
/// leaves the machine.
fn test_router() -> Router {
    let power =
        PowerClient::with_config("http://127.0.0.1:9/point", Duration::from_secs(2)).unwrap();
    let state = AppState::new(DayScore::with_power_client(power));
    create_router(state)
}

async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get(test_router(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(test_router(), "/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let response = get(test_router(), "/weather-risk").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_parameters_are_rejected() {
    let response = get(test_router(), "/weather-risk?lat=abc&lon=2.35&dayOfYear=196").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_latitude_is_rejected() {
    let response = get(test_router(), "/weather-risk?lat=99.0&lon=2.35&dayOfYear=196").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("Latitude"), "unexpected message: {message}");
}

#[tokio::test]
async fn out_of_range_longitude_is_rejected() {
    let response = get(test_router(), "/weather-risk?lat=48.85&lon=-200.0&dayOfYear=196").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Longitude"));
}

#[tokio::test]
async fn day_of_year_zero_is_rejected() {
    let response = get(test_router(), "/weather-risk?lat=48.85&lon=2.35&dayOfYear=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("366"));
}

#[tokio::test]
async fn day_of_year_above_366_is_rejected() {
    let response = get(test_router(), "/weather-risk?lat=48.85&lon=2.35&dayOfYear=400").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unreachable_archive_maps_to_500_with_generic_message() {
    let response = get(test_router(), "/weather-risk?lat=48.85&lon=2.35&dayOfYear=196").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Failed to fetch data from the upstream climate archive"
    );
}

#[tokio::test]
async fn post_to_weather_risk_is_not_allowed() {
    let request = Request::builder()
        .method("POST")
        .uri("/weather-risk?lat=48.85&lon=2.35&dayOfYear=196")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
