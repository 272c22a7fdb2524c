use thiserror::Error;

/// Failures surfaced by the geocode-then-weather proxy chain.
///
/// Upstream causes are logged where they happen and collapsed into
/// [`ProxyError::Upstream`]; callers only ever see the three messages below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    #[error("City name is required")]
    MissingCityName,

    #[error("City not found")]
    CityNotFound,

    #[error("Error fetching weather data")]
    Upstream(String),
}

impl ProxyError {
    /// HTTP status equivalent of the failure.
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::MissingCityName => 400,
            ProxyError::CityNotFound => 404,
            ProxyError::Upstream(_) => 500,
        }
    }
}

/// Failures seen by the dashboard when talking to the proxy.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please enter a town or city name.")]
    EmptyCity,

    #[error("Proxy responded with status {status}: {message}")]
    Proxy { status: u16, message: String },

    #[error("Failed to reach weather proxy: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode weather payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The single alert text shown to the user; details go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::EmptyCity => "Please enter a town or city name.",
            _ => "Error fetching weather data. Please try again.",
        }
    }
}
