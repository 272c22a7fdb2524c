//! Dashboard side of the HTTP boundary: query the proxy, then build the display model.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::{
    error::ClientError,
    model::{UnitSystem, WeatherPayload, WeatherQuery},
    presenter::{DisplayModel, DisplayOptions},
};

#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http: Client::new() }
    }

    /// `GET /weather` on the proxy and decode the payload.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherPayload, ClientError> {
        let mut params = vec![("cityName", query.city_name.as_str())];
        if let Some(units) = query.units {
            params.push(("units", units.as_str()));
        }

        debug!(city = %query.city_name, units = ?query.units, "requesting weather from proxy");

        let res = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(ClientError::Proxy { status: status.as_u16(), message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// One query-and-render cycle per call.
///
/// The unit system is an argument rather than stored state: toggling units
/// is a fresh call to [`Dashboard::show`] with the other system.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: ProxyClient,
    options: DisplayOptions,
}

impl Dashboard {
    pub fn new(client: ProxyClient, options: DisplayOptions) -> Self {
        Self { client, options }
    }

    /// Fetch and build. Rendering only happens after a successful fetch, so a
    /// failure leaves whatever the caller displayed last untouched.
    pub async fn show(&self, city_name: &str, units: UnitSystem) -> Result<DisplayModel, ClientError> {
        let query =
            WeatherQuery::new(city_name, Some(units)).map_err(|_| ClientError::EmptyCity)?;

        let payload = self.client.fetch(&query).await.inspect_err(|e| {
            error!("Error fetching weather data: {e}");
        })?;

        Ok(DisplayModel::build(&query.city_name, &payload, units, Utc::now(), &self.options))
    }
}
