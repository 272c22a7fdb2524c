use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Coordinates, UnitSystem};

use super::{Geocoder, WeatherProvider};

const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
const ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    geocoding_url: String,
    onecall_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, GEOCODING_URL.to_string(), ONECALL_URL.to_string())
    }

    pub fn with_endpoints(api_key: String, geocoding_url: String, onecall_url: String) -> Self {
        Self { api_key, geocoding_url, onecall_url, http: Client::new() }
    }

    pub fn onecall_url(&self) -> &str {
        &self.onecall_url
    }

    /// Sends a GET and returns the body, failing on transport errors and non-2xx statuses.
    async fn get_body(&self, url: &str, query: &[(&str, String)], what: &str) -> Result<String> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    lat: f64,
    lon: f64,
}

#[async_trait]
impl Geocoder for OpenWeatherProvider {
    async fn geocode(&self, city_name: &str) -> Result<Option<Coordinates>> {
        debug!(city = city_name, "geocoding city");

        let body = self
            .get_body(
                &self.geocoding_url,
                &[
                    ("q", city_name.to_string()),
                    ("limit", "1".to_string()),
                    ("appid", self.api_key.clone()),
                ],
                "geocoding",
            )
            .await?;

        let parsed: Vec<OwGeoEntry> =
            serde_json::from_str(&body).context("Failed to parse OpenWeather geocoding JSON")?;

        Ok(parsed.first().map(|entry| Coordinates { latitude: entry.lat, longitude: entry.lon }))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_weather(
        &self,
        at: Coordinates,
        units: Option<UnitSystem>,
    ) -> Result<serde_json::Value> {
        debug!(lat = at.latitude, lon = at.longitude, units = ?units, "fetching one call weather");

        let mut query = vec![
            ("lat", at.latitude.to_string()),
            ("lon", at.longitude.to_string()),
            ("exclude", "minutely,hourly".to_string()),
            ("appid", self.api_key.clone()),
        ];
        if let Some(units) = units {
            query.push(("units", units.as_str().to_string()));
        }

        let body = self.get_body(&self.onecall_url, &query, "one call").await?;

        serde_json::from_str(&body).context("Failed to parse OpenWeather one call JSON")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
