use weather_core::{IconRef, NormalizedWeatherSnapshot};

use crate::state::ViewState;

fn icon_glyph(icon: IconRef, is_daytime: bool) -> &'static str {
    match icon {
        IconRef::Clear if is_daytime => "☀",
        IconRef::Clear => "☾",
        IconRef::PartlyCloudy => "⛅",
        IconRef::Cloudy => "☁",
        IconRef::Fog => "🌫",
        IconRef::Drizzle | IconRef::Rain => "🌧",
        IconRef::Thunderstorm => "⛈",
        IconRef::Snow => "❄",
    }
}

/// Human-readable block for one snapshot.
pub fn snapshot(s: &NormalizedWeatherSnapshot) -> String {
    let wind = match s.wind_gust {
        Some(gust) => format!("{} mph / Gust: {gust} mph", s.wind_speed),
        None => format!("{} mph", s.wind_speed),
    };

    format!(
        "{}, {}  ({} local, {})\n\
         {} {}\n\
         Temperature: {}°F (feels like {}°F)\n\
         High / Low:  {}°F / {}°F\n\
         Humidity:    {}%\n\
         Wind:        {wind}",
        s.location_name,
        s.region,
        s.local_time_label,
        if s.is_daytime { "day" } else { "night" },
        icon_glyph(s.condition_icon, s.is_daytime),
        s.condition_label,
        s.current_temp,
        s.feels_like,
        s.temp_max,
        s.temp_min,
        s.humidity,
    )
}

/// What the search loop shows after each state change.
pub fn view(state: &ViewState) -> String {
    if state.loading {
        return "Loading weather data...".to_string();
    }
    if let Some(err) = &state.error {
        return format!("Error: {err}");
    }
    match &state.weather {
        Some(s) => snapshot(s),
        None => String::new(),
    }
}
