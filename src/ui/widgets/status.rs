use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

pub const WELCOME_TITLE: &str = "How's the sky looking today?";
pub const LOADING_LABEL: &str = "Loading forecast...";

pub fn render_welcome(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Type a city name and press Enter",
            Style::default().fg(theme.muted_text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel(theme)),
        area,
    );
}

pub fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(LOADING_LABEL, Style::default().fg(theme.muted_text)))
            .alignment(Alignment::Center)
            .block(panel(theme)),
        area,
    );
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Search again to retry",
            Style::default().fg(theme.muted_text),
        )),
    ];
    let block = panel(theme).border_style(Style::default().fg(theme.danger));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn panel(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface))
}
