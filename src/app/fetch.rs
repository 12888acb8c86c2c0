use anyhow::Result;
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, Effect, Refresh, SessionEvent},
    cli::Cli,
    data::{
        forecast::ForecastClient,
        geocode::{GeocodeClient, LOOKUP_COUNT, SUGGESTION_COUNT},
    },
    domain::weather::Place,
};

/// The two HTTP collaborators, shared by every spawned request.
#[derive(Debug, Clone)]
pub struct Services {
    pub forecast: ForecastClient,
    pub geocode: GeocodeClient,
}

impl Services {
    pub fn new(forecast: ForecastClient, geocode: GeocodeClient) -> Self {
        Self { forecast, geocode }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let forecast = match &cli.forecast_url {
            Some(url) => ForecastClient::with_base_url(url.clone())?,
            None => ForecastClient::new()?,
        };
        let geocode = match &cli.geocode_url {
            Some(url) => GeocodeClient::with_base_url(url.clone())?,
            None => GeocodeClient::new()?,
        };
        Ok(Self::new(forecast, geocode))
    }

    /// Forecast fetch and forward lookup of the place name, issued together.
    /// Both must succeed; the lookup only fills in details the selected
    /// place lacks.
    pub async fn refresh(&self, place: Place) -> Result<Refresh> {
        let lookup = async {
            if place.has_searchable_name() {
                self.geocode.search(&place.name, LOOKUP_COUNT).await
            } else {
                Ok(Vec::new())
            }
        };
        let (forecast, matches) = tokio::try_join!(
            self.forecast.fetch(place.latitude, place.longitude),
            lookup
        )?;
        Ok(Refresh {
            place: confirm_place(place, &matches),
            forecast,
        })
    }

    /// Runs one effect to completion and reports it as a session event.
    pub async fn execute(&self, effect: Effect) -> SessionEvent {
        match effect {
            Effect::Search { seq, query } => {
                match self.geocode.search(&query, SUGGESTION_COUNT).await {
                    Ok(places) => SessionEvent::SuggestionsLoaded { seq, places },
                    Err(err) => SessionEvent::SuggestionsFailed {
                        seq,
                        failure: err.into(),
                    },
                }
            }
            Effect::Refresh { seq, place } => match self.refresh(place).await {
                Ok(refresh) => SessionEvent::ForecastLoaded { seq, refresh },
                Err(err) => SessionEvent::ForecastFailed {
                    seq,
                    failure: err.into(),
                },
            },
        }
    }

    pub fn spawn(&self, effect: Effect, tx: mpsc::Sender<AppEvent>) {
        let services = self.clone();
        tokio::spawn(async move {
            let event = services.execute(effect).await;
            let _ = tx.send(AppEvent::Session(event)).await;
        });
    }
}

fn confirm_place(mut place: Place, matches: &[Place]) -> Place {
    if place.country.is_some() {
        return place;
    }
    // Only a candidate with the same name may lend its country.
    let best = matches
        .iter()
        .find(|candidate| candidate.name.eq_ignore_ascii_case(&place.name));
    if let Some(best) = best {
        place.country.clone_from(&best.country);
    }
    place
}
