use crate::{
    Config,
    model::{Coordinates, UnitSystem},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// First match only; `Ok(None)` when the lookup returned no places.
    async fn geocode(&self, city_name: &str) -> anyhow::Result<Option<Coordinates>>;
}

/// Fetches the combined current/daily/alerts payload for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Returns the provider JSON untouched. `units: None` leaves the choice to the provider.
    async fn fetch_weather(
        &self,
        at: Coordinates,
        units: Option<UnitSystem>,
    ) -> anyhow::Result<serde_json::Value>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key()?;

    Ok(OpenWeatherProvider::with_endpoints(
        api_key.to_owned(),
        config.upstream.geocoding_url.clone(),
        config.upstream.onecall_url.clone(),
    ))
}
