//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration handling
//! - The geocode → weather proxy chain and its upstream providers
//! - Presentation logic: city-local time, unit symbols, themes
//! - A client for the proxy that drives one query-and-render cycle
//!
//! It is used by `weather-server` and `weather-cli`.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod proxy;

pub use client::{Dashboard, ProxyClient};
pub use config::Config;
pub use error::{ClientError, ProxyError};
pub use model::{Coordinates, UnitSystem, WeatherPayload, WeatherQuery};
pub use presenter::{DisplayModel, DisplayOptions, Theme};
pub use provider::{Geocoder, WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use proxy::WeatherProxy;
