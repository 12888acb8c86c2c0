use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::{domain::projection::CurrentView, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, current: &CurrentView, theme: &Theme) {
    let tiles = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (metric, tile) in current.metrics().iter().zip(tiles.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(metric.label, Style::default().fg(theme.muted_text)))
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface));
        let value = Paragraph::new(Span::styled(
            metric.value.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(value, *tile);
    }
}
