use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    cli::IconMode,
    domain::{projection::Projection, weather::format_measure_or_placeholder},
    ui::theme::{Theme, icon_color},
};

pub const NO_PLACE_LABEL: &str = "Select a city";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    place_name: Option<&str>,
    projection: &Projection,
    mode: IconMode,
    theme: &Theme,
) {
    let current = &projection.current;
    let lines = vec![
        Line::from(Span::styled(
            place_name.unwrap_or(NO_PLACE_LABEL).to_string(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            projection.display_date.clone(),
            Style::default().fg(theme.muted_text),
        )),
        Line::from(vec![
            Span::styled(
                current.icon.glyph(mode),
                Style::default().fg(icon_color(current.icon)),
            ),
            Span::raw(" "),
            Span::styled(
                format_measure_or_placeholder(current.temperature, " °C"),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(current.label, Style::default().fg(theme.muted_text)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
