//! Mapping from OpenWeather condition phrases to display labels and icons.

use crate::model::IconRef;

/// Icon used for phrases the table does not know.
pub const DEFAULT_ICON: IconRef = IconRef::Clear;

/// Label and icon for a condition phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionDisplay {
    pub label: String,
    pub icon: IconRef,
}

/// Keyed by the lowercase upstream description. Exact matches only.
static CONDITION_TABLE: &[(&str, &str, IconRef)] = &[
    ("clear sky", "Clear Skies", IconRef::Clear),
    ("few clouds", "Few Clouds", IconRef::PartlyCloudy),
    ("scattered clouds", "Scattered Clouds", IconRef::PartlyCloudy),
    ("broken clouds", "Broken Clouds", IconRef::Cloudy),
    ("overcast clouds", "Overcast", IconRef::Cloudy),
    ("light intensity drizzle", "Light Drizzle", IconRef::Drizzle),
    ("drizzle", "Drizzle", IconRef::Drizzle),
    ("heavy intensity drizzle", "Heavy Drizzle", IconRef::Drizzle),
    ("light rain", "Light Rain", IconRef::Rain),
    ("moderate rain", "Moderate Rain", IconRef::Rain),
    ("heavy intensity rain", "Heavy Rain", IconRef::Rain),
    ("very heavy rain", "Very Heavy Rain", IconRef::Rain),
    ("freezing rain", "Freezing Rain", IconRef::Rain),
    ("light intensity shower rain", "Light Showers", IconRef::Rain),
    ("shower rain", "Showers", IconRef::Rain),
    ("heavy intensity shower rain", "Heavy Showers", IconRef::Rain),
    ("thunderstorm", "Thunderstorm", IconRef::Thunderstorm),
    ("thunderstorm with light rain", "Thunderstorm with Light Rain", IconRef::Thunderstorm),
    ("thunderstorm with rain", "Thunderstorm with Rain", IconRef::Thunderstorm),
    ("thunderstorm with heavy rain", "Thunderstorm with Heavy Rain", IconRef::Thunderstorm),
    ("light snow", "Light Snow", IconRef::Snow),
    ("snow", "Snow", IconRef::Snow),
    ("heavy snow", "Heavy Snow", IconRef::Snow),
    ("sleet", "Sleet", IconRef::Snow),
    ("mist", "Mist", IconRef::Fog),
    ("smoke", "Smoke", IconRef::Fog),
    ("haze", "Haze", IconRef::Fog),
    ("fog", "Fog", IconRef::Fog),
    ("sand", "Sand", IconRef::Fog),
    ("dust", "Dust", IconRef::Fog),
];

/// Look up a raw upstream description.
///
/// Unknown phrases never fail: they are title-cased word by word and paired
/// with [`DEFAULT_ICON`].
pub fn lookup_condition(raw: &str) -> ConditionDisplay {
    let trimmed = raw.trim();
    let key = trimmed.to_lowercase();

    match CONDITION_TABLE.iter().find(|(phrase, _, _)| *phrase == key) {
        Some((_, label, icon)) => ConditionDisplay { label: (*label).to_string(), icon: *icon },
        None => ConditionDisplay { label: title_case(trimmed), icon: DEFAULT_ICON },
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
