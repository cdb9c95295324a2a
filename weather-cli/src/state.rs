//! Presentation state for the interactive search loop.

use weather_core::{NormalizedWeatherSnapshot, WeatherError};

/// Everything the search screen renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub search_text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub weather: Option<NormalizedWeatherSnapshot>,
}

#[derive(Debug)]
pub enum Action {
    SearchTextChanged(String),
    LookupStarted,
    LookupSucceeded(NormalizedWeatherSnapshot),
    LookupFailed(WeatherError),
}

impl ViewState {
    /// Pure reducer: the next state after `action`.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SearchTextChanged(text) => Self { search_text: text, ..self },
            Action::LookupStarted => Self { loading: true, error: None, ..self },
            Action::LookupSucceeded(snapshot) => {
                Self { loading: false, error: None, weather: Some(snapshot), ..self }
            }
            // A failed lookup clears the previous result.
            Action::LookupFailed(err) => {
                Self { loading: false, error: Some(err.to_string()), weather: None, ..self }
            }
        }
    }
}
