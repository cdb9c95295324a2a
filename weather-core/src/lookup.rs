//! The two sequential upstream calls behind every user request.

use tracing::info;

use crate::{
    NormalizedWeatherSnapshot, WeatherError,
    geocode::resolve,
    normalize::normalize,
    provider::{Geocoder, WeatherSource},
};

/// Resolve `query`, fetch current conditions there and normalize them.
pub async fn lookup<C>(
    client: &C,
    query: &str,
    country: &str,
) -> Result<NormalizedWeatherSnapshot, WeatherError>
where
    C: Geocoder + WeatherSource,
{
    let location = resolve(client, query, country).await?;
    let report = client.current_weather(location.latitude, location.longitude).await?;
    let snapshot = normalize(&report, &location)?;

    info!(location = %snapshot.location_name, region = %snapshot.region, "weather lookup complete");
    Ok(snapshot)
}

/// Upstream weather JSON for `city`, with the resolved region added as `state`.
pub async fn proxy_payload<C>(
    client: &C,
    city: &str,
    country: &str,
) -> Result<serde_json::Value, WeatherError>
where
    C: Geocoder + WeatherSource,
{
    let location = resolve(client, city, country).await?;
    let mut json = client.current_weather_json(location.latitude, location.longitude).await?;

    let object = json
        .as_object_mut()
        .ok_or_else(|| WeatherError::malformed("current weather response is not a JSON object"))?;
    object.insert("state".to_string(), serde_json::Value::String(location.region));

    Ok(json)
}
