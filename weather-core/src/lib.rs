//! Core library for the `weather` CLI and proxy server.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoding and current-weather collaborator
//! - The geocode resolver, weather normalizer and condition table
//! - Shared domain models (resolved locations, raw reports, snapshots)
//!
//! It is used by `weather-cli` and `weather-server`.

pub mod conditions;
pub mod config;
pub mod error;
pub mod geocode;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod provider;

pub use conditions::{ConditionDisplay, lookup_condition};
pub use config::Config;
pub use error::WeatherError;
pub use geocode::resolve;
pub use lookup::{lookup, proxy_payload};
pub use model::{IconRef, NormalizedWeatherSnapshot, RawWeatherReport, ResolvedLocation};
pub use normalize::normalize;
pub use provider::{Geocoder, WeatherSource, openweather::OpenWeatherClient};
