//! Turns a [`WeatherPayload`](crate::model::WeatherPayload) into display-ready values.
//!
//! Every timestamp is rendered in the queried city's local time, derived from
//! the payload's `timezone_offset`, never from the viewer's zone.

pub mod display;
pub mod text;
pub mod theme;
pub mod time;

pub use display::{
    AlertView, AlertsView, CurrentView, DisplayModel, DisplayOptions, ForecastDay, IconScale,
};
pub use theme::Theme;
