use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    cli::IconMode,
    domain::{
        projection::{DaySelector, HourlyEntry, Projection, WINDOW_LEN},
        weather::{PLACEHOLDER, format_measure_or_placeholder},
    },
    ui::theme::{Theme, icon_color},
};

pub fn render(frame: &mut Frame, area: Rect, projection: &Projection, mode: IconMode, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title(projection))
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface_alt));

    // Always eight rows; slots past the end of the series show the placeholder.
    let lines: Vec<Line> = (0..WINDOW_LEN)
        .map(|slot| match projection.hourly.entries.get(slot) {
            Some(entry) => entry_line(entry, mode, theme),
            None => Line::from(Span::styled(
                format!("{PLACEHOLDER:<6}"),
                Style::default().fg(theme.muted_text),
            )),
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn title(projection: &Projection) -> String {
    let prev = if projection.day.get() > 0 { "◂" } else { " " };
    let next = if projection.day.get() < DaySelector::MAX { "▸" } else { " " };
    format!("Hourly Forecast {prev} {} {next}", projection.day_title)
}

fn entry_line(entry: &HourlyEntry, mode: IconMode, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<6}", entry.display_time),
            Style::default().fg(theme.muted_text),
        ),
        Span::raw(" "),
        Span::styled(entry.icon.glyph(mode), Style::default().fg(icon_color(entry.icon))),
        Span::raw(" "),
        Span::styled(
            format!("{:>6}", format_measure_or_placeholder(entry.temperature, "°C")),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ])
}
