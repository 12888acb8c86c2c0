pub mod layout;
pub mod theme;
pub mod widgets;

use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::Session,
    cli::Cli,
    domain::weather::Place,
};

use self::{
    layout::{MIN_HEIGHT, MIN_WIDTH, dropdown_area, is_too_small, split_dashboard, split_screen},
    theme::{detect_color_capability, theme_for},
};

/// Draws one frame. `now` is only used when the forecast carries no current timestamp.
pub fn render(frame: &mut Frame, session: &Session, cli: &Cli, now: NaiveDateTime) {
    let area = frame.area();
    let theme = theme_for(detect_color_capability());

    if is_too_small(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("skyglass"));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let (search_area, body) = split_screen(area);
    widgets::search::render_input(frame, search_area, session, &theme);

    if let Some(message) = &session.error {
        widgets::status::render_error(frame, body, message, &theme);
    } else if session.loading {
        widgets::status::render_loading(frame, body, &theme);
    } else if let Some(projection) = session.projection(now) {
        let mode = cli.icon_mode();
        let place_name = session.place.as_ref().map(Place::display_name);
        let areas = split_dashboard(body);
        widgets::current::render(
            frame,
            areas.current,
            place_name.as_deref(),
            &projection,
            mode,
            &theme,
        );
        widgets::metrics::render(frame, areas.metrics, &projection.current, &theme);
        widgets::daily::render(frame, areas.daily, &projection.daily, mode, &theme);
        widgets::hourly::render(frame, areas.hourly, &projection, mode, &theme);
    } else {
        widgets::status::render_welcome(frame, body, &theme);
    }

    if !session.candidates.is_empty() {
        let dropdown = dropdown_area(search_area, area, session.candidates.len());
        widgets::search::render_dropdown(frame, dropdown, session, &theme);
    }
}
