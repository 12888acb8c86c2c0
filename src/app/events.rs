use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::{
    domain::{
        projection::DaySelector,
        weather::{ForecastResponse, Place},
    },
    error::FetchFailure,
};

#[derive(Debug)]
pub enum AppEvent {
    Input(Event),
    Session(SessionEvent),
}

/// A completed forecast refresh: the payload plus the place it belongs to,
/// with details filled in from the forward lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub place: Place,
    pub forecast: ForecastResponse,
}

/// Everything that can change a [`crate::app::state::Session`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    QueryChanged(String),
    /// Search `name` and select the first candidate (startup city).
    Lookup(String),
    SuggestionsLoaded {
        seq: u64,
        places: Vec<Place>,
    },
    SuggestionsFailed {
        seq: u64,
        failure: FetchFailure,
    },
    HighlightNext,
    HighlightPrevious,
    SelectHighlighted,
    DismissCandidates,
    PlaceSelected(Place),
    ForecastLoaded {
        seq: u64,
        refresh: Refresh,
    },
    ForecastFailed {
        seq: u64,
        failure: FetchFailure,
    },
    DaySelected(DaySelector),
    NextDay,
    PreviousDay,
    FocusToggled,
    Quit,
}

/// Work a transition asks the runtime to perform. Completions come back as
/// [`SessionEvent`]s carrying the same sequence number.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Search { seq: u64, query: String },
    Refresh { seq: u64, place: Place },
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
