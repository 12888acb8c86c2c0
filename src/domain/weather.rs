mod conditions;
mod conversions;

pub use conditions::*;
pub use conversions::*;

use serde::{Deserialize, Serialize};

/// A geocoding candidate. Selecting one sets the coordinates a forecast is
/// fetched for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            country: None,
            latitude: lat,
            longitude: lon,
        }
    }

    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    /// Coordinates-only places have no name worth geocoding.
    pub fn has_searchable_name(&self) -> bool {
        self.name != Self::from_coords(self.latitude, self.longitude).name
    }
}

/// Raw forecast payload as delivered by the forecast endpoint.
///
/// Every block and field is optional: absent arrays decode as empty and
/// absent scalars as `None`, so projection never has to fail on a partial
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: Option<CurrentBlock>,
    #[serde(default)]
    pub hourly: HourlyBlock,
    #[serde(default)]
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    #[serde(default)]
    pub wind_speed_10m: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
}

/// Parallel hourly series aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
}

impl HourlyBlock {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn temperature_at(&self, idx: usize) -> Option<f64> {
        self.temperature_2m.get(idx).copied().flatten()
    }

    pub fn weather_code_at(&self, idx: usize) -> Option<i32> {
        self.weather_code.get(idx).copied().flatten()
    }
}

/// Parallel daily series, one entry per calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
}

impl DailyBlock {
    pub fn max_at(&self, idx: usize) -> Option<f64> {
        self.temperature_2m_max.get(idx).copied().flatten()
    }

    pub fn min_at(&self, idx: usize) -> Option<f64> {
        self.temperature_2m_min.get(idx).copied().flatten()
    }

    pub fn weather_code_at(&self, idx: usize) -> Option<i32> {
        self.weather_code.get(idx).copied().flatten()
    }
}
