use anyhow::{Context, Result};
use reqwest::Client;

use crate::domain::weather::ForecastResponse;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,precipitation,apparent_temperature,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code";
const FORECAST_DAYS: &str = "7";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .context("failed to build forecast http client")?,
            base_url: base_url.into(),
        })
    }

    /// Fetches the raw current/hourly/daily payload for one coordinate pair.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        tracing::debug!(latitude, longitude, "requesting forecast");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .context("forecast request failed")?
            .error_for_status()
            .context("forecast request returned non-success status")?;

        let payload: ForecastResponse = response
            .json()
            .await
            .context("failed to decode forecast payload")?;

        tracing::debug!(
            hourly = payload.hourly.len(),
            daily = payload.daily.time.len(),
            "forecast decoded"
        );
        Ok(payload)
    }
}
