use serde::{Deserialize, Serialize};

use crate::cli::IconMode;

/// Codes the forecast provider can emit.
pub const WEATHER_CODE_RANGE: std::ops::RangeInclusive<i32> = 0..=99;

/// Label shown for any code missing from [`WEATHER_LABELS`].
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Icon bucket a weather code is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    Sunny,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    Drizzle,
    Storm,
    Unknown,
}

impl IconCategory {
    pub const ALL: [IconCategory; 9] = [
        IconCategory::Sunny,
        IconCategory::PartlyCloudy,
        IconCategory::Overcast,
        IconCategory::Fog,
        IconCategory::Rain,
        IconCategory::Snow,
        IconCategory::Drizzle,
        IconCategory::Storm,
        IconCategory::Unknown,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            IconCategory::Sunny => "sunny",
            IconCategory::PartlyCloudy => "partly-cloudy",
            IconCategory::Overcast => "overcast",
            IconCategory::Fog => "fog",
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Drizzle => "drizzle",
            IconCategory::Storm => "storm",
            IconCategory::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = icon_tokens(self);
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

/// Icon bucket for a weather code.
///
/// Rules are checked top to bottom and the first match wins, so the drizzle
/// codes 51..=57 land in `Rain` and the rain-shower codes 80..=82 land in
/// `Drizzle`. Fog covers 45..=48 only. Codes outside the provider
/// vocabulary (0..=99) are `Unknown` before any rule is consulted.
#[must_use]
pub fn icon_category(code: i32) -> IconCategory {
    if !WEATHER_CODE_RANGE.contains(&code) {
        IconCategory::Unknown
    } else if code == 0 || code == 1 {
        IconCategory::Sunny
    } else if code == 2 {
        IconCategory::PartlyCloudy
    } else if code == 3 {
        IconCategory::Overcast
    } else if (45..=48).contains(&code) {
        IconCategory::Fog
    } else if (51..=67).contains(&code) {
        IconCategory::Rain
    } else if (71..=77).contains(&code) {
        IconCategory::Snow
    } else if (80..=82).contains(&code) {
        IconCategory::Drizzle
    } else if (85..=86).contains(&code) {
        IconCategory::Snow
    } else if code >= 95 {
        IconCategory::Storm
    } else {
        IconCategory::Unknown
    }
}

/// Human-readable condition for an exact weather code.
#[must_use]
pub fn condition_label(code: i32) -> &'static str {
    WEATHER_LABELS
        .iter()
        .find_map(|(candidate, label)| (*candidate == code).then_some(*label))
        .unwrap_or(UNKNOWN_LABEL)
}

pub const WEATHER_LABELS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (80, "Rain showers"),
    (81, "Rain showers"),
    (82, "Heavy rain showers"),
    (85, "Snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with hail"),
    (99, "Thunderstorm with heavy hail"),
];

fn icon_tokens(category: IconCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        IconCategory::Sunny => ("SUN", "☀️", "☀"),
        IconCategory::PartlyCloudy => ("PCL", "⛅", "⛅"),
        IconCategory::Overcast => ("CLD", "☁️", "☁"),
        IconCategory::Fog => ("FOG", "🌫️", "░"),
        IconCategory::Rain => ("RAN", "🌧️", "☂"),
        IconCategory::Snow => ("SNW", "🌨️", "❄"),
        IconCategory::Drizzle => ("DRZ", "🌦️", "⛆"),
        IconCategory::Storm => ("THN", "⛈️", "⚡"),
        IconCategory::Unknown => ("--", "--", "--"),
    }
}
