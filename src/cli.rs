#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{projection::DaySelector, weather::Place};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skyglass",
    version,
    about = "Terminal weather dashboard: search a place, see current, daily and hourly forecasts"
)]
pub struct Cli {
    /// Place to search for on startup; the first match is selected
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Day to show in the hourly panel (0 = today)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub day: u8,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Print the projected forecast to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Emit the one-shot report as JSON
    #[arg(long, requires = "one_shot")]
    pub json: bool,

    /// Write logs to this file (the dashboard never logs to the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => {}
        }
        if self.one_shot && self.city.is_none() && self.lat.is_none() {
            anyhow::bail!("--one-shot needs a CITY or --lat/--lon");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn initial_day(&self) -> DaySelector {
        DaySelector::clamped(i64::from(self.day))
    }

    /// A place given directly by coordinates, if any.
    #[must_use]
    pub fn coordinate_place(&self) -> Option<Place> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Place::from_coords(lat, lon)),
            _ => None,
        }
    }
}
