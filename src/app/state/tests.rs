use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Focus, Sequencer, Session, is_city_char, session_event_for_key};
use crate::{
    app::events::{Effect, Refresh, SessionEvent},
    domain::{
        projection::DaySelector,
        weather::{CurrentBlock, ForecastResponse, Place},
    },
    error::FetchFailure,
};

fn place(name: &str, country: &str) -> Place {
    Place {
        name: name.to_string(),
        country: Some(country.to_string()),
        latitude: 41.89,
        longitude: 12.48,
    }
}

fn forecast_at(time: &str) -> ForecastResponse {
    ForecastResponse {
        current: Some(CurrentBlock {
            time: Some(time.to_string()),
            weather_code: Some(3),
            ..CurrentBlock::default()
        }),
        ..ForecastResponse::default()
    }
}

fn refresh_seq(effect: Option<Effect>) -> u64 {
    match effect {
        Some(Effect::Refresh { seq, .. }) => seq,
        other => panic!("expected refresh effect, got {other:?}"),
    }
}

fn search_seq(effect: Option<Effect>) -> u64 {
    match effect {
        Some(Effect::Search { seq, .. }) => seq,
        other => panic!("expected search effect, got {other:?}"),
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn city_input_accepts_unicode_letters() {
    assert!(is_city_char('å'));
    assert!(is_city_char('é'));
    assert!(is_city_char('\''));
    assert!(!is_city_char('\n'));
    assert!(!is_city_char('\t'));
}

#[test]
fn sequencer_applies_only_newer_completions() {
    let mut seq = Sequencer::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(seq.accept(second));
    assert!(!seq.accept(first));
    assert!(!seq.accept(second));
    assert!(!seq.accept(99));
    assert!(seq.is_latest(second));
    assert_eq!(seq.issued(), 2);
}

#[test]
fn short_query_clears_candidates_without_search() {
    let mut session = Session::default();
    let seq = search_seq(session.apply(SessionEvent::QueryChanged("Ro".to_string())));
    session.apply(SessionEvent::SuggestionsLoaded {
        seq,
        places: vec![place("Rome", "Italy")],
    });
    assert_eq!(session.candidates.len(), 1);

    assert_eq!(session.apply(SessionEvent::QueryChanged("R".to_string())), None);
    assert!(session.candidates.is_empty());
}

#[test]
fn late_suggestions_after_clearing_are_dropped() {
    let mut session = Session::default();
    let seq = search_seq(session.apply(SessionEvent::QueryChanged("Ro".to_string())));
    session.apply(SessionEvent::QueryChanged(String::new()));
    session.apply(SessionEvent::SuggestionsLoaded {
        seq,
        places: vec![place("Rome", "Italy")],
    });
    assert!(session.candidates.is_empty());
}

#[test]
fn older_search_cannot_overwrite_newer_one() {
    let mut session = Session::default();
    let old = search_seq(session.apply(SessionEvent::QueryChanged("Pa".to_string())));
    let new = search_seq(session.apply(SessionEvent::QueryChanged("Par".to_string())));
    session.apply(SessionEvent::SuggestionsLoaded {
        seq: new,
        places: vec![place("Paris", "France")],
    });
    session.apply(SessionEvent::SuggestionsLoaded {
        seq: old,
        places: vec![place("Pahoa", "United States")],
    });
    assert_eq!(session.candidates[0].name, "Paris");
}

#[test]
fn selecting_candidate_issues_refresh_and_sets_state() {
    let mut session = Session::default();
    let seq = search_seq(session.apply(SessionEvent::QueryChanged("Ro".to_string())));
    session.apply(SessionEvent::SuggestionsLoaded {
        seq,
        places: vec![place("Rome", "Italy"), place("Rosario", "Argentina")],
    });
    session.apply(SessionEvent::HighlightNext);
    session.apply(SessionEvent::HighlightNext);
    assert_eq!(session.highlighted, 1);

    let effect = session.apply(SessionEvent::SelectHighlighted);
    match effect {
        Some(Effect::Refresh { seq, place }) => {
            assert_eq!(seq, 1);
            assert_eq!(place.name, "Rosario");
        }
        other => panic!("expected refresh, got {other:?}"),
    }
    assert!(session.loading);
    assert!(session.candidates.is_empty());
    assert_eq!(session.query, "Rosario");
    assert_eq!(session.coordinates, Some((41.89, 12.48)));
    assert_eq!(session.focus, Focus::Forecast);
}

#[test]
fn lookup_selects_first_match() {
    let mut session = Session::default();
    let seq = search_seq(session.apply(SessionEvent::Lookup("Rome".to_string())));
    let effect = session.apply(SessionEvent::SuggestionsLoaded {
        seq,
        places: vec![place("Rome", "Italy"), place("Rome", "United States")],
    });
    match effect {
        Some(Effect::Refresh { place, .. }) => assert_eq!(place.display_name(), "Rome, Italy"),
        other => panic!("expected refresh, got {other:?}"),
    }
}

#[test]
fn lookup_without_matches_reports_error() {
    let mut session = Session::default();
    let seq = search_seq(session.apply(SessionEvent::Lookup("Nowhereville".to_string())));
    assert_eq!(
        session.apply(SessionEvent::SuggestionsLoaded {
            seq,
            places: Vec::new()
        }),
        None
    );
    assert_eq!(session.error.as_deref(), Some("No places found for Nowhereville"));
}

#[test]
fn forecast_success_clears_loading_and_error() {
    let mut session = Session::default();
    let seq = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    session.apply(SessionEvent::ForecastLoaded {
        seq,
        refresh: Refresh {
            place: place("Rome", "Italy"),
            forecast: forecast_at("2024-01-01T10:00"),
        },
    });
    assert!(!session.loading);
    assert!(session.error.is_none());
    assert!(session.forecast.is_some());
}

#[test]
fn stale_forecast_is_discarded() {
    let mut session = Session::default();
    let first = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    let second = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Oslo", "Norway"))));

    session.apply(SessionEvent::ForecastLoaded {
        seq: second,
        refresh: Refresh {
            place: place("Oslo", "Norway"),
            forecast: forecast_at("2024-01-01T11:00"),
        },
    });
    assert!(!session.loading);

    session.apply(SessionEvent::ForecastLoaded {
        seq: first,
        refresh: Refresh {
            place: place("Rome", "Italy"),
            forecast: forecast_at("2024-01-01T10:00"),
        },
    });
    assert_eq!(session.place.as_ref().map(|p| p.name.as_str()), Some("Oslo"));
    assert_eq!(session.forecast, Some(forecast_at("2024-01-01T11:00")));
}

#[test]
fn older_completion_applies_while_newer_still_loading() {
    let mut session = Session::default();
    let first = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    let _second = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Oslo", "Norway"))));

    session.apply(SessionEvent::ForecastLoaded {
        seq: first,
        refresh: Refresh {
            place: place("Rome", "Italy"),
            forecast: forecast_at("2024-01-01T10:00"),
        },
    });
    assert!(session.forecast.is_some());
    assert!(session.loading);
}

#[test]
fn stale_failure_does_not_replace_fresh_forecast() {
    let mut session = Session::default();
    let first = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    let second = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Oslo", "Norway"))));
    session.apply(SessionEvent::ForecastLoaded {
        seq: second,
        refresh: Refresh {
            place: place("Oslo", "Norway"),
            forecast: forecast_at("2024-01-01T11:00"),
        },
    });
    session.apply(SessionEvent::ForecastFailed {
        seq: first,
        failure: FetchFailure::new("timed out"),
    });
    assert!(session.error.is_none());
}

#[test]
fn superseded_failure_keeps_newer_refresh_loading() {
    let mut session = Session::default();
    let first = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Oslo", "Norway"))));
    session.apply(SessionEvent::ForecastFailed {
        seq: first,
        failure: FetchFailure::new("timed out"),
    });
    assert!(session.error.is_none());
    assert!(session.loading);
    assert_eq!(
        session.place.as_ref().map(|place| place.name.as_str()),
        Some("Oslo")
    );
}

#[test]
fn latest_failure_surfaces_flat_message() {
    let mut session = Session::default();
    let seq = refresh_seq(session.apply(SessionEvent::PlaceSelected(place("Rome", "Italy"))));
    session.apply(SessionEvent::ForecastFailed {
        seq,
        failure: FetchFailure::new("forecast request failed: connection refused"),
    });
    assert!(!session.loading);
    assert_eq!(
        session.error.as_deref(),
        Some("forecast request failed: connection refused")
    );
}

#[test]
fn day_navigation_clamps() {
    let mut session = Session::default();
    session.apply(SessionEvent::PreviousDay);
    assert_eq!(session.day, DaySelector::TODAY);
    for _ in 0..10 {
        session.apply(SessionEvent::NextDay);
    }
    assert_eq!(session.day.get(), 6);
    session.apply(SessionEvent::DaySelected(DaySelector::clamped(2)));
    assert_eq!(session.day.get(), 2);
}

#[test]
fn projection_follows_selected_day() {
    let mut session = Session::default();
    assert!(session.projection(chrono::NaiveDateTime::default()).is_none());
    session.forecast = Some(forecast_at("2024-01-01T10:00"));
    session.day = DaySelector::clamped(3);
    let projection = session
        .projection(chrono::NaiveDateTime::default())
        .expect("projection");
    assert_eq!(projection.day.get(), 3);
    assert_eq!(projection.current.label, "Overcast");
}

#[test]
fn typing_in_search_edits_query() {
    let mut session = Session::default();
    let event = session_event_for_key(&session, key(KeyCode::Char('R')));
    assert_eq!(event, Some(SessionEvent::QueryChanged("R".to_string())));
    session.apply(SessionEvent::QueryChanged("Ro".to_string()));
    assert_eq!(
        session_event_for_key(&session, key(KeyCode::Backspace)),
        Some(SessionEvent::QueryChanged("R".to_string()))
    );
    assert_eq!(session_event_for_key(&Session::default(), key(KeyCode::Backspace)), None);
}

#[test]
fn forecast_focus_keys_drive_day_selector() {
    let mut session = Session::default();
    session.apply(SessionEvent::FocusToggled);
    assert_eq!(session.focus, Focus::Forecast);
    assert_eq!(
        session_event_for_key(&session, key(KeyCode::Right)),
        Some(SessionEvent::NextDay)
    );
    assert_eq!(
        session_event_for_key(&session, key(KeyCode::Char('4'))),
        Some(SessionEvent::DaySelected(DaySelector::clamped(4)))
    );
    assert_eq!(session_event_for_key(&session, key(KeyCode::Char('7'))), None);
    assert_eq!(
        session_event_for_key(&session, key(KeyCode::Char('q'))),
        Some(SessionEvent::Quit)
    );
}

#[test]
fn ctrl_c_quits_from_any_focus() {
    let session = Session::default();
    let event = session_event_for_key(
        &session,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert_eq!(event, Some(SessionEvent::Quit));
    let mut session = session;
    session.apply(SessionEvent::Quit);
    assert!(!session.running);
}
