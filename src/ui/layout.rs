use ratatui::layout::{Constraint, Layout, Rect};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;
/// Below this width the hourly panel moves under the main column.
pub const SIDE_BY_SIDE_WIDTH: u16 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
    pub current: Rect,
    pub metrics: Rect,
    pub daily: Rect,
    pub hourly: Rect,
}

#[must_use]
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Search bar on top, everything else below.
#[must_use]
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let [search, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    (search, body)
}

#[must_use]
pub fn split_dashboard(body: Rect) -> DashboardAreas {
    let (main, hourly) = if body.width >= SIDE_BY_SIDE_WIDTH {
        let [main, hourly] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(body);
        (main, hourly)
    } else {
        let [main, hourly] =
            Layout::vertical([Constraint::Min(14), Constraint::Length(10)]).areas(body);
        (main, hourly)
    };

    let [current, metrics, daily] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Min(5),
    ])
    .areas(main);

    DashboardAreas {
        current,
        metrics,
        daily,
        hourly,
    }
}

/// Drop-down area directly under the search input.
#[must_use]
pub fn dropdown_area(search: Rect, bounds: Rect, rows: usize) -> Rect {
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(bounds.bottom().saturating_sub(search.bottom()));
    Rect {
        x: search.x,
        y: search.bottom(),
        width: search.width,
        height,
    }
}
