use serde::Serialize;
use std::fmt;

/// Background picked from the current weather description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Default,
}

/// Checked in order; the first keyword found in the description wins.
const KEYWORDS: &[(&str, Theme)] = &[
    ("clear", Theme::Clear),
    ("clouds", Theme::Clouds),
    ("rain", Theme::Rain),
    ("drizzle", Theme::Drizzle),
    ("thunderstorm", Theme::Thunderstorm),
    ("snow", Theme::Snow),
    ("mist", Theme::Mist),
    ("fog", Theme::Fog),
    ("haze", Theme::Haze),
];

impl Theme {
    pub fn for_description(description: &str) -> Self {
        let description = description.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(keyword, _)| description.contains(keyword))
            .map(|(_, theme)| *theme)
            .unwrap_or(Theme::Default)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Theme::Clear => "clear",
            Theme::Clouds => "clouds",
            Theme::Rain => "rain",
            Theme::Drizzle => "drizzle",
            Theme::Thunderstorm => "thunderstorm",
            Theme::Snow => "snow",
            Theme::Mist => "mist",
            Theme::Fog => "fog",
            Theme::Haze => "haze",
            Theme::Default => "default",
        }
    }

    pub fn background_image(&self) -> String {
        let file = match self {
            Theme::Clear => "sun",
            Theme::Thunderstorm => "storm",
            Theme::Default => "default-weather",
            other => other.key(),
        };

        format!("/assets/images/weather-backgrounds/{file}.jpg")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
