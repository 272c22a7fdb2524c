use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ProxyError;

/// Measurement system forwarded to the provider's `units` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }

    /// The other unit system, as flipped by the dashboard toggle.
    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            )),
        }
    }
}

/// One user request: a city and the unit system to query it in.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherQuery {
    pub city_name: String,
    pub units: Option<UnitSystem>,
}

impl WeatherQuery {
    pub fn new(city_name: impl Into<String>, units: Option<UnitSystem>) -> Result<Self, ProxyError> {
        let city_name = city_name.into();
        if city_name.trim().is_empty() {
            return Err(ProxyError::MissingCityName);
        }

        Ok(Self { city_name, units })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Typed view of the One Call response, decoded on the presenter side only.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    pub current: CurrentConditions,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
    #[serde(default)]
    pub timezone_offset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    /// Absent during polar day and polar night.
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub temp: DailyTemperature,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemperature {
    pub day: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAlert {
    pub event: String,
    #[serde(default)]
    pub description: String,
    pub start: i64,
    pub end: i64,
}

impl CurrentConditions {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

impl DailyForecast {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}
