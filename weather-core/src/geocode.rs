use tracing::debug;

use crate::{WeatherError, model::ResolvedLocation, provider::Geocoder};

/// Region used when the geocoder omits one.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Resolve a free-text place name within `country` to a single location.
///
/// Blank input fails with [`WeatherError::InvalidQuery`] without touching
/// the geocoder.
pub async fn resolve(
    geocoder: &dyn Geocoder,
    query: &str,
    country: &str,
) -> Result<ResolvedLocation, WeatherError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(WeatherError::InvalidQuery);
    }

    let scoped = format!("{query},{country}");
    let candidate = geocoder
        .geocode(&scoped, 1)
        .await?
        .into_iter()
        .next()
        .ok_or(WeatherError::NotFound)?;

    debug!(name = %candidate.name, lat = candidate.lat, lon = candidate.lon, "resolved {scoped}");

    Ok(ResolvedLocation {
        latitude: candidate.lat,
        longitude: candidate.lon,
        display_name: candidate.name,
        region: candidate.state.unwrap_or_else(|| UNKNOWN_REGION.to_string()),
    })
}
