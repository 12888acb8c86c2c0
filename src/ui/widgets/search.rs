use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::state::{Focus, Session},
    ui::theme::Theme,
};

pub const PROMPT: &str = "Search for a place...";

pub fn render_input(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let focused = session.focus == Focus::Search;
    let border = if focused { theme.accent } else { theme.border };

    let line = if session.query.is_empty() && !focused {
        Line::from(Span::styled(PROMPT, Style::default().fg(theme.muted_text)))
    } else {
        let mut spans = vec![Span::styled(
            session.query.clone(),
            Style::default().fg(theme.text),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(if focused { PROMPT } else { "Search  (/ to focus)" })
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.surface));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Candidate list drawn over whatever sits under the search bar.
pub fn render_dropdown(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    frame.render_widget(Clear, area);

    let items = session
        .candidates
        .iter()
        .map(|place| ListItem::new(place.display_name()))
        .collect::<Vec<_>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.surface_alt).fg(theme.text)),
        )
        .highlight_style(
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(session.highlighted));
    frame.render_stateful_widget(list, area, &mut state);
}
