//! Non-interactive output: one projection printed as text or JSON.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::{
    app::fetch::Services,
    cli::{Cli, IconMode},
    data::geocode::SUGGESTION_COUNT,
    domain::{
        projection::{Projection, project, reference_now},
        weather::{Place, format_measure_or_placeholder},
    },
};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub place: &'a Place,
    pub projection: &'a Projection,
}

pub fn render_text(place: &Place, projection: &Projection, mode: IconMode) -> String {
    let current = &projection.current;
    let mut lines = vec![
        place.display_name(),
        projection.display_date.clone(),
        format!(
            "{} {}  {}",
            current.icon.glyph(mode),
            format_measure_or_placeholder(current.temperature, " °C"),
            current.label
        ),
        current
            .metrics()
            .iter()
            .map(|metric| format!("{} {}", metric.label, metric.value))
            .collect::<Vec<_>>()
            .join(" · "),
        String::new(),
        format!("Hourly ({})", projection.day_title),
    ];

    if projection.hourly.is_empty() {
        lines.push("  (no hourly data)".to_string());
    }
    for entry in &projection.hourly.entries {
        lines.push(format!(
            "  {:<6} {:<4} {}",
            entry.display_time,
            entry.icon.glyph(mode),
            format_measure_or_placeholder(entry.temperature, "°C")
        ));
    }

    lines.push("Daily".to_string());
    for entry in &projection.daily {
        lines.push(format!(
            "  {}  {:<4} {} / {}",
            entry.label,
            entry.icon.glyph(mode),
            format_measure_or_placeholder(entry.max, "°"),
            format_measure_or_placeholder(entry.min, "°")
        ));
    }

    lines.join("\n")
}

pub fn render_json(place: &Place, projection: &Projection) -> Result<String> {
    serde_json::to_string_pretty(&Report { place, projection })
        .context("failed to serialize report")
}

/// Resolves the place from the command line, fetches once and renders.
pub async fn run_one_shot(cli: &Cli, services: &Services) -> Result<String> {
    let place = match (cli.coordinate_place(), cli.city.as_deref()) {
        (Some(place), _) => place,
        (None, Some(city)) => services
            .geocode
            .search(city, SUGGESTION_COUNT)
            .await?
            .into_iter()
            .next()
            .with_context(|| format!("No places found for {city}"))?,
        (None, None) => anyhow::bail!("--one-shot needs a CITY or --lat/--lon"),
    };

    tracing::info!(place = %place.display_name(), "one-shot forecast");
    let refresh = services.refresh(place).await?;
    let now = reference_now(&refresh.forecast, Local::now().naive_local());
    let projection = project(&refresh.forecast, cli.initial_day(), now);

    if cli.json {
        render_json(&refresh.place, &projection)
    } else {
        Ok(render_text(&refresh.place, &projection, cli.icon_mode()))
    }
}
