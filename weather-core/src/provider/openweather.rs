use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::WeatherError;

use super::{GeoCandidate, Geocoder, WeatherSource};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// OpenWeather geocoding and current-weather endpoints, imperial units.
#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                WeatherError::UpstreamUnavailable(format!("failed to reach OpenWeather ({what}): {e}"))
            })?;

        let body = checked_body(res, what).await?;

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::malformed(format!("failed to parse OpenWeather {what} JSON: {e}"))
        })
    }
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    #[instrument(skip(self), level = "debug")]
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeoCandidate>, WeatherError> {
        let limit = limit.to_string();
        let candidates: Vec<GeoCandidate> = self
            .get_json("/geo/1.0/direct", &[("q", query), ("limit", limit.as_str())], "geocoding")
            .await?;

        debug!("geocoder returned {} candidate(s)", candidates.len());
        Ok(candidates)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    #[instrument(skip(self), level = "debug")]
    async fn current_weather_json(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<serde_json::Value, WeatherError> {
        let lat = latitude.to_string();
        let lon = longitude.to_string();

        let json: serde_json::Value = self
            .get_json(
                "/data/2.5/weather",
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("units", "imperial")],
                "current weather",
            )
            .await?;

        if !json.is_object() {
            return Err(WeatherError::malformed("current weather response is not a JSON object"));
        }
        Ok(json)
    }
}

async fn checked_body(res: Response, what: &str) -> Result<String, WeatherError> {
    let status = res.status();
    let body = res.text().await.map_err(|e| {
        WeatherError::UpstreamUnavailable(format!("failed to read OpenWeather {what} body: {e}"))
    })?;

    if !status.is_success() {
        return Err(WeatherError::UpstreamUnavailable(format!(
            "OpenWeather {what} request failed with status {status}: {}",
            truncate_body(&body),
        )));
    }
    Ok(body)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn geocode_sends_query_limit_and_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("q", "Marin,US"))
            .and(query_param("limit", "1"))
            .and(query_param("appid", "test_key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "Marin County", "lat": 37.97, "lon": -122.53, "state": "CA", "country": "US"}
            ])))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url("test_key".into(), &mock_server.uri());
        let candidates = client.geocode("Marin,US", 1).await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].state.as_deref(), Some("CA"));
    }

    #[tokio::test]
    async fn current_weather_requests_imperial_units() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "37.97"))
            .and(query_param("lon", "-122.53"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "San Rafael",
                "main": {"temp": 68.2, "feels_like": 66.9, "temp_max": 71.0, "temp_min": 60.3, "humidity": 55},
                "wind": {"speed": 9.6},
                "weather": [{"description": "clear sky"}],
                "dt": 1_700_000_000,
                "timezone": -28_800,
                "sys": {"sunrise": 1_699_960_000, "sunset": 1_700_000_400}
            })))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url("test_key".into(), &mock_server.uri());
        let report = client.current_weather(37.97, -122.53).await.unwrap();

        assert_eq!(report.timezone, Some(-28_800));
        assert_eq!(report.weather[0].description, "clear sky");
    }

    #[tokio::test]
    async fn error_status_is_upstream_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url("test_key".into(), &mock_server.uri());
        let err = client.current_weather_json(1.0, 2.0).await.unwrap_err();

        match err {
            WeatherError::UpstreamUnavailable(msg) => {
                assert!(msg.contains("503"));
                assert!(msg.contains("maintenance"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = OpenWeatherClient::with_base_url("test_key".into(), &mock_server.uri());
        let err = client.geocode("Marin,US", 1).await.unwrap_err();

        assert!(matches!(err, WeatherError::MalformedUpstreamPayload(_)));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn debug_hides_api_key() {
        let client = OpenWeatherClient::new("secret".into());
        assert!(!format!("{client:?}").contains("secret"));
    }
}
