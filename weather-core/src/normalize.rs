//! Turns a raw OpenWeather report into a display-ready snapshot.

use chrono::{DateTime, NaiveDateTime};

use crate::{
    conditions::lookup_condition,
    error::WeatherError,
    model::{NormalizedWeatherSnapshot, RawWeatherReport, ResolvedLocation},
};

/// Phrase used when the report carries no condition descriptor.
const UNKNOWN_CONDITION: &str = "unknown";

pub fn normalize(
    report: &RawWeatherReport,
    location: &ResolvedLocation,
) -> Result<NormalizedWeatherSnapshot, WeatherError> {
    let main = report.main.as_ref().ok_or_else(|| WeatherError::malformed("missing `main` block"))?;
    let wind = report.wind.as_ref().ok_or_else(|| WeatherError::malformed("missing `wind` block"))?;
    let sys = report.sys.as_ref().ok_or_else(|| WeatherError::malformed("missing `sys` block"))?;
    let sunrise = sys.sunrise.ok_or_else(|| WeatherError::malformed("missing `sys.sunrise`"))?;
    let sunset = sys.sunset.ok_or_else(|| WeatherError::malformed("missing `sys.sunset`"))?;
    let offset = report.timezone.ok_or_else(|| WeatherError::malformed("missing `timezone`"))?;
    let observed = report.dt.ok_or_else(|| WeatherError::malformed("missing `dt`"))?;

    let local_now = shift_to_local(observed, offset)?;
    let local_sunrise = shift_to_local(sunrise, offset)?;
    let local_sunset = shift_to_local(sunset, offset)?;

    // [sunrise, sunset): exactly at sunset is night
    let is_daytime = local_now >= local_sunrise && local_now < local_sunset;

    let description = report
        .weather
        .first()
        .map(|w| w.description.as_str())
        .unwrap_or(UNKNOWN_CONDITION);
    let condition = lookup_condition(description);

    Ok(NormalizedWeatherSnapshot {
        location_name: location.display_name.clone(),
        region: location.region.clone(),
        current_temp: round_half_up(main.temp),
        feels_like: round_half_up(main.feels_like),
        temp_max: round_half_up(main.temp_max),
        temp_min: round_half_up(main.temp_min),
        humidity: round_half_up(main.humidity),
        wind_speed: round_half_up(wind.speed),
        wind_gust: wind.gust.map(round_half_up),
        is_daytime,
        local_time_label: local_now.format("%-I:%M %p").to_string(),
        condition_label: condition.label,
        condition_icon: condition.icon,
    })
}

/// Wall-clock time at the location: the UTC instant moved by `offset_secs`.
fn shift_to_local(utc_secs: i64, offset_secs: i64) -> Result<NaiveDateTime, WeatherError> {
    utc_secs
        .checked_add(offset_secs)
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            WeatherError::malformed(format!(
                "timestamp {utc_secs} with offset {offset_secs}s is out of range"
            ))
        })
}

/// 72.5 -> 73, -0.5 -> 0.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
