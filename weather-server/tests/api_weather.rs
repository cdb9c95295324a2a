//! Route tests for the weather proxy, run against the router directly.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use weather_core::OpenWeatherClient;
use weather_server::{AppState, router};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(client: Option<OpenWeatherClient>) -> Router {
    router(AppState { client, country: "US".to_string() })
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn weather_body() -> serde_json::Value {
    serde_json::json!({
        "name": "San Rafael",
        "main": {"temp": 68.2, "feels_like": 66.9, "temp_max": 71.0, "temp_min": 60.3, "humidity": 55},
        "wind": {"speed": 9.6},
        "weather": [{"description": "clear sky"}],
        "dt": 1_700_000_000,
        "timezone": -28_800,
        "sys": {"sunrise": 1_699_960_000, "sunset": 1_700_000_400}
    })
}

#[tokio::test]
async fn missing_city_is_400() {
    let (status, body) = get(app(None), "/api/weather").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({"error": "City is required"}));
}

#[tokio::test]
async fn empty_city_is_400() {
    let (status, _) = get(app(None), "/api/weather?city=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_api_key_is_500() {
    let (status, body) = get(app(None), "/api/weather?city=Marin").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Missing API key"}));
}

#[tokio::test]
async fn unknown_city_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = OpenWeatherClient::with_base_url("k".into(), &server.uri());
    let (status, body) = get(app(Some(client)), "/api/weather?city=Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"error": "City not found"}));
}

#[tokio::test]
async fn upstream_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let client = OpenWeatherClient::with_base_url("k".into(), &server.uri());
    let (status, body) = get(app(Some(client)), "/api/weather?city=Marin").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
}

#[tokio::test]
async fn success_forwards_weather_with_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Marin,US"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "Marin County", "lat": 37.97, "lon": -122.53, "state": "CA"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
        .mount(&server)
        .await;

    let client = OpenWeatherClient::with_base_url("k".into(), &server.uri());
    let (status, body) = get(app(Some(client)), "/api/weather?city=Marin").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CA");
    assert_eq!(body["name"], "San Rafael");
    assert_eq!(body["timezone"], -28_800);
}

#[tokio::test]
async fn root_reports_running() {
    let response = app(None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(&bytes[..], b"API is running...");
}
