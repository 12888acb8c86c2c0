use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    cli::IconMode,
    domain::{
        projection::{DAILY_LEN, DailyEntry},
        weather::format_measure_or_placeholder,
    },
    ui::theme::{Theme, icon_color},
};

pub fn render(frame: &mut Frame, area: Rect, daily: &[DailyEntry], mode: IconMode, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Daily Forecast")
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::horizontal([Constraint::Ratio(1, DAILY_LEN as u32); DAILY_LEN]).split(inner);
    for (entry, column) in daily.iter().zip(columns.iter()) {
        frame.render_widget(
            Paragraph::new(day_lines(entry, mode, theme)).alignment(Alignment::Center),
            *column,
        );
    }
}

fn day_lines(entry: &DailyEntry, mode: IconMode, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(entry.label, Style::default().fg(theme.muted_text))),
        Line::from(Span::styled(
            entry.icon.glyph(mode),
            Style::default().fg(icon_color(entry.icon)),
        )),
        Line::from(vec![
            Span::styled(
                format_measure_or_placeholder(entry.max, "°"),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format_measure_or_placeholder(entry.min, "°"),
                Style::default().fg(theme.muted_text),
            ),
        ]),
    ]
}
