use thiserror::Error;

/// Failures of a single lookup. None of them are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Blank query; rejected before any network call.
    #[error("Please enter a city name")]
    InvalidQuery,

    /// The geocoder returned no candidates.
    #[error("City not found. Try adding a state/region code.")]
    NotFound,

    /// Transport failure or non-success status from an upstream service.
    #[error("Weather service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream answered, but not with the shape we expect.
    #[error("Unexpected response from weather service: {0}")]
    MalformedUpstreamPayload(String),
}

impl WeatherError {
    pub fn malformed(what: impl Into<String>) -> Self {
        Self::MalformedUpstreamPayload(what.into())
    }
}
