use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{WeatherError, model::RawWeatherReport};

pub mod openweather;

/// One geocoding candidate, as the upstream reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoCandidate {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Forward geocoding: free-text place name to candidate coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Look up `query` (already scoped, e.g. `"Marin,US"`), returning at most `limit` candidates.
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeoCandidate>, WeatherError>;
}

/// Current conditions at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Raw upstream JSON, forwarded unchanged by the proxy.
    async fn current_weather_json(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<serde_json::Value, WeatherError>;

    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawWeatherReport, WeatherError> {
        let json = self.current_weather_json(latitude, longitude).await?;
        serde_json::from_value(json).map_err(|e| WeatherError::malformed(e.to_string()))
    }
}
