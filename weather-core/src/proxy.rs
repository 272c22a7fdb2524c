//! Two-hop proxy chain: city name → coordinates → weather payload.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::{
    error::ProxyError,
    model::{UnitSystem, WeatherQuery},
    provider::{Geocoder, WeatherProvider},
};

#[derive(Debug, Clone)]
pub struct WeatherProxy {
    geocoder: Arc<dyn Geocoder>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherProxy {
    pub fn new(geocoder: Arc<dyn Geocoder>, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { geocoder, provider }
    }

    /// Resolve `city_name` and return the provider's JSON for it unchanged.
    ///
    /// No upstream call is made for a missing name, and the weather call is
    /// skipped when geocoding finds nothing. Every other failure collapses to
    /// [`ProxyError::Upstream`].
    #[instrument(skip(self))]
    pub async fn fetch(
        &self,
        city_name: Option<&str>,
        units: Option<UnitSystem>,
    ) -> Result<serde_json::Value, ProxyError> {
        let query = WeatherQuery::new(city_name.unwrap_or_default(), units)?;

        let coordinates = self
            .geocoder
            .geocode(&query.city_name)
            .await
            .map_err(|e| upstream("geocoding", e))?
            .ok_or(ProxyError::CityNotFound)?;

        info!(lat = coordinates.latitude, lon = coordinates.longitude, "city resolved");

        self.provider
            .fetch_weather(coordinates, query.units)
            .await
            .map_err(|e| upstream("weather", e))
    }
}

fn upstream(step: &str, err: anyhow::Error) -> ProxyError {
    error!(step, "Error fetching weather data: {err:#}");
    ProxyError::Upstream(format!("{err:#}"))
}
