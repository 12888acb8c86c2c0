use chrono::NaiveDateTime;

use crate::{
    app::events::{Effect, Refresh, SessionEvent},
    data::geocode::is_searchable,
    domain::{
        projection::{DaySelector, Projection, project, reference_now},
        weather::{ForecastResponse, Place},
    },
    error::FetchFailure,
};

mod input;

pub use input::{is_city_char, session_event_for_input, session_event_for_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Forecast,
}

/// Orders completions of one request stream.
///
/// Every request takes the next number. A completion is applied only when
/// its number is higher than any completion applied before it, so a slow
/// response can never overwrite a fresher one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequencer {
    issued: u64,
    applied: u64,
}

impl Sequencer {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied || seq > self.issued {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Treat everything issued so far as answered.
    pub fn supersede(&mut self) {
        self.applied = self.issued;
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// All state of one dashboard session. Only [`Session::apply`] mutates it.
#[derive(Debug, Clone)]
pub struct Session {
    pub running: bool,
    pub focus: Focus,
    pub query: String,
    pub candidates: Vec<Place>,
    pub highlighted: usize,
    pub place: Option<Place>,
    pub coordinates: Option<(f64, f64)>,
    pub day: DaySelector,
    pub forecast: Option<ForecastResponse>,
    pub error: Option<String>,
    pub loading: bool,
    autoselect: bool,
    searches: Sequencer,
    refreshes: Sequencer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DaySelector::TODAY)
    }
}

impl Session {
    pub fn new(day: DaySelector) -> Self {
        Self {
            running: true,
            focus: Focus::Search,
            query: String::new(),
            candidates: Vec::new(),
            highlighted: 0,
            place: None,
            coordinates: None,
            day,
            forecast: None,
            error: None,
            loading: false,
            autoselect: false,
            searches: Sequencer::default(),
            refreshes: Sequencer::default(),
        }
    }

    /// Projection of the last applied forecast for the selected day.
    pub fn projection(&self, fallback_now: NaiveDateTime) -> Option<Projection> {
        self.forecast.as_ref().map(|forecast| {
            let now = reference_now(forecast, fallback_now);
            project(forecast, self.day, now)
        })
    }

    pub fn highlighted_candidate(&self) -> Option<&Place> {
        self.candidates.get(self.highlighted)
    }

    pub fn apply(&mut self, event: SessionEvent) -> Option<Effect> {
        match event {
            SessionEvent::QueryChanged(query) => self.change_query(query, false),
            SessionEvent::Lookup(name) => self.change_query(name, true),
            SessionEvent::SuggestionsLoaded { seq, places } => self.load_suggestions(seq, places),
            SessionEvent::SuggestionsFailed { seq, failure } => {
                self.fail_suggestions(seq, &failure);
                None
            }
            SessionEvent::HighlightNext => {
                if !self.candidates.is_empty() {
                    self.highlighted = (self.highlighted + 1).min(self.candidates.len() - 1);
                }
                None
            }
            SessionEvent::HighlightPrevious => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            SessionEvent::SelectHighlighted => self.select_highlighted(),
            SessionEvent::DismissCandidates => {
                self.clear_candidates();
                None
            }
            SessionEvent::PlaceSelected(place) => Some(self.select_place(place)),
            SessionEvent::ForecastLoaded { seq, refresh } => {
                self.load_forecast(seq, refresh);
                None
            }
            SessionEvent::ForecastFailed { seq, failure } => {
                self.fail_forecast(seq, failure);
                None
            }
            SessionEvent::DaySelected(day) => {
                self.day = day;
                None
            }
            SessionEvent::NextDay => {
                self.day = self.day.next();
                None
            }
            SessionEvent::PreviousDay => {
                self.day = self.day.previous();
                None
            }
            SessionEvent::FocusToggled => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Forecast,
                    Focus::Forecast => Focus::Search,
                };
                None
            }
            SessionEvent::Quit => {
                self.running = false;
                None
            }
        }
    }

    fn change_query(&mut self, query: String, autoselect: bool) -> Option<Effect> {
        self.query = query;
        self.autoselect = autoselect;
        if !is_searchable(&self.query) {
            self.clear_candidates();
            return None;
        }
        Some(Effect::Search {
            seq: self.searches.issue(),
            query: self.query.trim().to_string(),
        })
    }

    fn load_suggestions(&mut self, seq: u64, places: Vec<Place>) -> Option<Effect> {
        if !self.searches.accept(seq) {
            tracing::debug!(seq, "discarding stale suggestions");
            return None;
        }
        if self.autoselect {
            self.autoselect = false;
            return match places.into_iter().next() {
                Some(place) => Some(self.select_place(place)),
                None => {
                    self.error = Some(format!("No places found for {}", self.query));
                    None
                }
            };
        }
        self.candidates = places;
        self.highlighted = 0;
        None
    }

    fn fail_suggestions(&mut self, seq: u64, failure: &FetchFailure) {
        if !self.searches.accept(seq) {
            return;
        }
        tracing::warn!(seq, error = %failure, "place search failed");
        self.candidates.clear();
        if self.autoselect {
            self.autoselect = false;
            self.error = Some(failure.to_string());
        }
    }

    fn select_highlighted(&mut self) -> Option<Effect> {
        if let Some(place) = self.highlighted_candidate().cloned() {
            return Some(self.select_place(place));
        }
        let query = self.query.clone();
        self.change_query(query, true)
    }

    fn select_place(&mut self, place: Place) -> Effect {
        self.query = place.name.clone();
        self.clear_candidates();
        self.coordinates = Some((place.latitude, place.longitude));
        self.place = Some(place.clone());
        self.loading = true;
        self.error = None;
        self.focus = Focus::Forecast;
        Effect::Refresh {
            seq: self.refreshes.issue(),
            place,
        }
    }

    fn clear_candidates(&mut self) {
        self.candidates.clear();
        self.highlighted = 0;
        self.searches.supersede();
    }

    fn load_forecast(&mut self, seq: u64, refresh: Refresh) {
        if self.refreshes.is_latest(seq) {
            self.loading = false;
        }
        if !self.refreshes.accept(seq) {
            tracing::debug!(seq, "discarding stale forecast");
            return;
        }
        tracing::info!(seq, place = %refresh.place.display_name(), "forecast applied");
        self.coordinates = Some((refresh.place.latitude, refresh.place.longitude));
        self.place = Some(refresh.place);
        self.forecast = Some(refresh.forecast);
        self.error = None;
    }

    fn fail_forecast(&mut self, seq: u64, failure: FetchFailure) {
        // A failure of a superseded refresh must not hide the one still loading.
        if !self.refreshes.is_latest(seq) {
            tracing::debug!(seq, error = %failure, "discarding superseded forecast failure");
            return;
        }
        self.loading = false;
        if !self.refreshes.accept(seq) {
            tracing::debug!(seq, "discarding stale forecast failure");
            return;
        }
        tracing::warn!(seq, error = %failure, "forecast refresh failed");
        self.error = Some(failure.to_string());
    }
}

#[cfg(test)]
mod tests;
