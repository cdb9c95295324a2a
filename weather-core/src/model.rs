use serde::{Deserialize, Serialize};

/// Coordinates and naming for a user query, as returned by the geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
    /// State/region code, or `"Unknown"` when the geocoder has none.
    pub region: String,
}

/// OpenWeather "current weather" payload (imperial units).
///
/// Blocks are optional here so that a shape mismatch surfaces as
/// [`crate::WeatherError::MalformedUpstreamPayload`] from the normalizer
/// rather than as a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherReport {
    pub name: Option<String>,
    pub main: Option<RawMain>,
    pub wind: Option<RawWind>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    pub dt: Option<i64>,
    /// Offset from UTC in seconds.
    pub timezone: Option<i64>,
    pub sys: Option<RawSys>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWind {
    pub speed: f64,
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSys {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Neutral icon tag. The presentation layer decides what to draw for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
}

impl IconRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconRef::Clear => "clear",
            IconRef::PartlyCloudy => "partly_cloudy",
            IconRef::Cloudy => "cloudy",
            IconRef::Fog => "fog",
            IconRef::Drizzle => "drizzle",
            IconRef::Rain => "rain",
            IconRef::Thunderstorm => "thunderstorm",
            IconRef::Snow => "snow",
        }
    }
}

impl std::fmt::Display for IconRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready weather for one location. Temperatures are °F, speeds mph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedWeatherSnapshot {
    pub location_name: String,
    pub region: String,
    pub current_temp: i64,
    pub feels_like: i64,
    pub temp_max: i64,
    pub temp_min: i64,
    pub humidity: i64,
    pub wind_speed: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<i64>,
    pub is_daytime: bool,
    pub local_time_label: String,
    pub condition_label: String,
    pub condition_icon: IconRef,
}
