//! Same-origin proxy: `GET /api/weather?city=<name>` resolves the city and
//! forwards the upstream weather JSON with the resolved `state` added.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use weather_core::{OpenWeatherClient, WeatherError, proxy_payload};

#[derive(Debug, Clone)]
pub struct AppState {
    /// `None` when no API key is configured; requests then answer 500.
    pub client: Option<OpenWeatherClient>,
    pub country: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "API is running..." }))
        .route("/api/weather", get(weather))
        .with_state(Arc::new(state))
        .layer(cors)
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    city: Option<String>,
}

/// JSON error body with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::InvalidQuery => Self::new(StatusCode::BAD_REQUEST, "City is required"),
            WeatherError::NotFound => Self::new(StatusCode::NOT_FOUND, "City not found"),
            other => {
                tracing::error!("Error fetching weather data: {other}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let city = query
        .city
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "City is required"))?;

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Missing API key"))?;

    tracing::info!("weather request for {city:?}");
    let payload = proxy_payload(client, &city, &state.country).await?;
    Ok(Json(payload))
}
