use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    config::DisplayConfig,
    model::{Condition, UnitSystem, WeatherPayload},
};

use super::{
    text::{capitalize_words, one_decimal},
    theme::Theme,
    time,
};

/// Resolution of the provider's condition icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconScale {
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "4x")]
    X4,
}

impl IconScale {
    pub fn icon_url(&self, icon: &str) -> String {
        let scale = match self {
            IconScale::X2 => "2x",
            IconScale::X4 => "4x",
        };
        format!("https://openweathermap.org/img/wn/{icon}@{scale}.png")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Number of days shown after today.
    pub forecast_days: usize,
    pub current_icon: IconScale,
    pub forecast_icon: IconScale,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayConfig::default().into()
    }
}

impl From<DisplayConfig> for DisplayOptions {
    fn from(cfg: DisplayConfig) -> Self {
        Self {
            forecast_days: cfg.forecast_days,
            current_icon: cfg.current_icon,
            forecast_icon: cfg.forecast_icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub date_time: String,
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub temperature_symbol: &'static str,
    pub description: String,
    pub icon_url: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_unit: &'static str,
    pub pressure: f64,
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub weekday: String,
    pub description: String,
    pub temperature: String,
    pub temperature_symbol: &'static str,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    pub event: String,
    pub description: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "alerts", rename_all = "lowercase")]
pub enum AlertsView {
    Hidden,
    Active(Vec<AlertView>),
}

/// Everything the dashboard shows for one query, rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub current: CurrentView,
    pub forecast: Vec<ForecastDay>,
    pub alerts: AlertsView,
    pub theme: Theme,
}

impl DisplayModel {
    pub fn build(
        city_name: &str,
        payload: &WeatherPayload,
        units: UnitSystem,
        now: DateTime<Utc>,
        options: &DisplayOptions,
    ) -> Self {
        let offset = payload.timezone_offset;
        let current = &payload.current;
        let (description, icon) = describe(current.condition());

        let current_view = CurrentView {
            date_time: time::city_now(now, offset),
            city: capitalize_words(city_name),
            temperature: one_decimal(current.temp),
            feels_like: one_decimal(current.feels_like),
            temperature_symbol: units.temperature_symbol(),
            description: capitalize_words(description),
            icon_url: options.current_icon.icon_url(icon),
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            wind_unit: units.wind_unit(),
            pressure: current.pressure,
            sunrise: time::clock_opt(current.sunrise, offset),
            sunset: time::clock_opt(current.sunset, offset),
        };

        // daily[0] is today; the cards start at tomorrow.
        let forecast = payload
            .daily
            .iter()
            .skip(1)
            .take(options.forecast_days)
            .map(|day| {
                let (description, icon) = describe(day.condition());
                ForecastDay {
                    weekday: time::weekday(day.dt, offset),
                    description: capitalize_words(description),
                    temperature: one_decimal(day.temp.day),
                    temperature_symbol: units.temperature_symbol(),
                    icon_url: options.forecast_icon.icon_url(icon),
                }
            })
            .collect();

        let alerts = if payload.alerts.is_empty() {
            AlertsView::Hidden
        } else {
            AlertsView::Active(
                payload
                    .alerts
                    .iter()
                    .map(|alert| AlertView {
                        event: alert.event.clone(),
                        description: alert.description.clone(),
                        from: time::alert_time(alert.start, offset),
                        to: time::alert_time(alert.end, offset),
                    })
                    .collect(),
            )
        };

        Self { current: current_view, forecast, alerts, theme: Theme::for_description(description) }
    }
}

fn describe(condition: Option<&Condition>) -> (&str, &str) {
    condition.map(|c| (c.description.as_str(), c.icon.as_str())).unwrap_or(("", ""))
}

impl fmt::Display for DisplayModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.current;
        writeln!(f, "{}", c.date_time)?;
        writeln!(f, "{}", c.city)?;
        writeln!(f, "{}{}  (Feels Like: {}{})", c.temperature, c.temperature_symbol, c.feels_like, c.temperature_symbol)?;
        writeln!(f, "{}", c.description)?;
        writeln!(f, "Humidity: {}%", c.humidity)?;
        writeln!(f, "Wind Speed: {} {}", c.wind_speed, c.wind_unit)?;
        writeln!(f, "Atmospheric Pressure: {} hPa", c.pressure)?;
        writeln!(f, "Sunrise: {} / Sunset: {}", c.sunrise, c.sunset)?;

        if !self.forecast.is_empty() {
            writeln!(f)?;
            for day in &self.forecast {
                writeln!(
                    f,
                    "{:<10} {:>6}{}  {}",
                    day.weekday, day.temperature, day.temperature_symbol, day.description
                )?;
            }
        }

        if let AlertsView::Active(alerts) = &self.alerts {
            for alert in alerts {
                writeln!(f)?;
                writeln!(f, "Weather Alert! {}", alert.event)?;
                writeln!(f, "{}", alert.description)?;
                writeln!(f, "From: {}", alert.from)?;
                writeln!(f, "To: {}", alert.to)?;
            }
        }

        writeln!(f)?;
        write!(f, "Theme: {}", self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn london_payload(units: UnitSystem) -> WeatherPayload {
        let (temp, feels, wind, day_temps) = match units {
            UnitSystem::Metric => (15.2, 14.06, 4.6, [12.0, 11.44, 9.9, 10.0, 8.25, 7.0, 6.5]),
            UnitSystem::Imperial => (59.36, 57.31, 10.29, [53.6, 52.59, 49.82, 50.0, 46.85, 44.6, 43.7]),
        };
        let daily: Vec<_> = day_temps
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let dt = 1_699_963_200_i64 + i as i64 * 86_400;
                serde_json::json!({
                    "dt": dt,
                    "temp": { "day": t },
                    "weather": [{ "description": "overcast clouds", "icon": "04d" }]
                })
            })
            .collect();

        serde_json::from_value(serde_json::json!({
            "timezone_offset": 0,
            "current": {
                "temp": temp,
                "feels_like": feels,
                "humidity": 81,
                "wind_speed": wind,
                "pressure": 1012,
                "sunrise": 1_700_000_000,
                "sunset": 1_700_030_000,
                "weather": [{ "description": "light rain", "icon": "10d" }]
            },
            "daily": daily
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn london_metric_example() {
        let payload = london_payload(UnitSystem::Metric);
        let model =
            DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());

        assert_eq!(model.current.city, "London");
        assert_eq!(format!("{}{}", model.current.temperature, model.current.temperature_symbol), "15.2°C");
        assert_eq!(model.current.feels_like, "14.1");
        assert_eq!(model.current.description, "Light Rain");
        assert_eq!(model.current.sunrise, "22:13");
        assert_eq!(model.current.sunset, "06:33");
        assert_eq!(model.current.wind_unit, "m/s");
        assert_eq!(model.current.icon_url, "https://openweathermap.org/img/wn/10d@4x.png");
        assert_eq!(model.current.date_time, "Tuesday 14 Nov 2023 at 22:13");
        assert_eq!(model.theme, Theme::Rain);
        assert_eq!(model.alerts, AlertsView::Hidden);
    }

    #[test]
    fn forecast_skips_today_and_honours_window() {
        let payload = london_payload(UnitSystem::Metric);

        let five = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        assert_eq!(five.forecast.len(), 5);
        assert_eq!(five.forecast[0].temperature, "11.4");
        assert_eq!(five.forecast[0].weekday, "Wednesday");
        assert_eq!(five.forecast[0].description, "Overcast Clouds");
        assert_eq!(five.forecast[0].icon_url, "https://openweathermap.org/img/wn/04d@2x.png");
        assert_eq!(five.forecast[4].weekday, "Sunday");

        let options = DisplayOptions { forecast_days: 4, forecast_icon: IconScale::X4, ..Default::default() };
        let four = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &options);
        assert_eq!(four.forecast.len(), 4);
        assert_eq!(four.forecast[3].weekday, "Saturday");
        assert!(four.forecast[0].icon_url.ends_with("@4x.png"));
    }

    #[test]
    fn short_daily_yields_fewer_cards() {
        let mut payload = london_payload(UnitSystem::Metric);
        payload.daily.truncate(3);

        let model = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        assert_eq!(model.forecast.len(), 2);

        payload.daily.clear();
        let model = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        assert!(model.forecast.is_empty());
    }

    #[test]
    fn imperial_changes_symbols_and_values() {
        let metric = DisplayModel::build(
            "london",
            &london_payload(UnitSystem::Metric),
            UnitSystem::Metric,
            now(),
            &DisplayOptions::default(),
        );
        let imperial = DisplayModel::build(
            "london",
            &london_payload(UnitSystem::Imperial),
            UnitSystem::Imperial,
            now(),
            &DisplayOptions::default(),
        );

        assert_eq!(imperial.current.temperature, "59.4");
        assert_eq!(imperial.current.temperature_symbol, "°F");
        assert_eq!(imperial.current.wind_unit, "mph");
        assert_eq!(imperial.forecast[0].temperature_symbol, "°F");
        assert_ne!(metric.current.temperature, imperial.current.temperature);
        // Clock strings do not depend on units.
        assert_eq!(metric.current.sunrise, imperial.current.sunrise);
    }

    #[test]
    fn alerts_are_localized_with_city_offset() {
        let mut payload = london_payload(UnitSystem::Metric);
        payload.timezone_offset = 3600;
        payload.alerts = serde_json::from_value(serde_json::json!([
            { "event": "Yellow wind warning", "description": "Strong gusts", "start": 1_700_000_000, "end": 1_700_030_000 }
        ]))
        .unwrap();

        let model = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        let AlertsView::Active(alerts) = &model.alerts else {
            panic!("expected active alerts");
        };
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].from, "14/11/2023, 23:13:20");
        assert_eq!(alerts[0].to, "15/11/2023, 07:33:20");
        assert_eq!(model.current.sunrise, "23:13");
    }

    #[test]
    fn missing_condition_renders_blank_and_default_theme() {
        let mut payload = london_payload(UnitSystem::Metric);
        payload.current.weather.clear();

        let model = DisplayModel::build("paris", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        assert_eq!(model.current.description, "");
        assert_eq!(model.theme, Theme::Default);
    }

    #[test]
    fn polar_payload_without_sun_times_still_renders() {
        let payload: WeatherPayload = serde_json::from_value(serde_json::json!({
            "timezone_offset": 3600,
            "current": {
                "temp": -8.34,
                "feels_like": -14.0,
                "humidity": 86,
                "wind_speed": 3.1,
                "pressure": 1003,
                "weather": [{ "description": "light snow", "icon": "13n" }]
            },
            "daily": []
        }))
        .unwrap();

        let model = DisplayModel::build("tromsø", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());

        assert_eq!(model.current.city, "Tromsø");
        assert_eq!(model.current.temperature, "-8.3");
        assert_eq!(model.current.sunrise, "--:--");
        assert_eq!(model.current.sunset, "--:--");
        assert_eq!(model.theme, Theme::Snow);
        assert!(model.to_string().contains("Sunrise: --:-- / Sunset: --:--"));
    }

    #[test]
    fn text_rendering_contains_key_lines() {
        let payload = london_payload(UnitSystem::Metric);
        let model = DisplayModel::build("london", &payload, UnitSystem::Metric, now(), &DisplayOptions::default());
        let text = model.to_string();

        assert!(text.contains("15.2°C"));
        assert!(text.contains("Humidity: 81%"));
        assert!(text.contains("Wind Speed: 4.6 m/s"));
        assert!(text.contains("Atmospheric Pressure: 1012 hPa"));
        assert!(text.contains("Sunrise: 22:13 / Sunset: 06:33"));
        assert!(text.ends_with("Theme: rain"));
        assert!(!text.contains("Weather Alert!"));
    }
}
