use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::Place;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;
/// Candidates offered while typing.
pub const SUGGESTION_COUNT: u8 = 5;
/// Candidates requested when confirming a selected place during a refresh.
pub const LOOKUP_COUNT: u8 = 10;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .context("failed to build geocoding http client")?,
            base_url: base_url.into(),
        })
    }

    /// Candidate places for a name fragment, in the order the service ranks
    /// them. A missing `results` field means no matches.
    pub async fn search(&self, name: &str, count: u8) -> Result<Vec<Place>> {
        if !is_searchable(name) {
            return Ok(Vec::new());
        }

        tracing::debug!(name, count, "requesting geocoding candidates");
        let count = count.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", name),
                ("count", count.as_str()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::into_place)
            .collect())
    }
}

#[must_use]
pub fn is_searchable(name: &str) -> bool {
    name.trim().chars().count() >= MIN_QUERY_CHARS
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl GeocodeResult {
    fn into_place(self) -> Place {
        Place {
            name: self.name,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
