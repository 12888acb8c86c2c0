use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Focus, Session};
use crate::{app::events::SessionEvent, domain::projection::DaySelector};

pub fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch)
    } else {
        None
    }
}

pub fn session_event_for_input(session: &Session, event: &Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => session_event_for_key(session, *key),
        _ => None,
    }
}

/// Maps a key press to the session transition it requests, if any.
pub fn session_event_for_key(session: &Session, key: KeyEvent) -> Option<SessionEvent> {
    if matches!(key.code, KeyCode::Char('c' | 'C')) && key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(SessionEvent::Quit);
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return Some(SessionEvent::FocusToggled);
    }
    match session.focus {
        Focus::Search => search_key(session, key),
        Focus::Forecast => forecast_key(key),
    }
}

fn search_key(session: &Session, key: KeyEvent) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Enter => Some(SessionEvent::SelectHighlighted),
        KeyCode::Down => Some(SessionEvent::HighlightNext),
        KeyCode::Up => Some(SessionEvent::HighlightPrevious),
        KeyCode::Esc if !session.candidates.is_empty() => Some(SessionEvent::DismissCandidates),
        KeyCode::Esc => Some(SessionEvent::FocusToggled),
        KeyCode::Backspace => {
            let mut query = session.query.clone();
            query.pop()?;
            Some(SessionEvent::QueryChanged(query))
        }
        _ => {
            let ch = command_char(key).filter(|ch| is_city_char(*ch))?;
            let mut query = session.query.clone();
            query.push(ch);
            Some(SessionEvent::QueryChanged(query))
        }
    }
}

fn forecast_key(key: KeyEvent) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Left => return Some(SessionEvent::PreviousDay),
        KeyCode::Right => return Some(SessionEvent::NextDay),
        KeyCode::Esc => return Some(SessionEvent::Quit),
        _ => {}
    }
    match command_char(key)? {
        'q' | 'Q' => Some(SessionEvent::Quit),
        'h' => Some(SessionEvent::PreviousDay),
        'l' => Some(SessionEvent::NextDay),
        't' => Some(SessionEvent::DaySelected(DaySelector::TODAY)),
        '/' | 's' => Some(SessionEvent::FocusToggled),
        digit @ '0'..='6' => {
            let day = digit.to_digit(10).map(i64::from)?;
            DaySelector::new(day).ok().map(SessionEvent::DaySelected)
        }
        _ => None,
    }
}
