use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct DashboardLayout {
    pub header: Rect,
    pub counter: Rect,
    pub terminal: Rect,
    pub analysis: Rect,
    pub footer: Rect,
}

pub fn dashboard_layout(area: Rect) -> DashboardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(7), // counter + sub-stats
            Constraint::Min(8),    // terminal | analysis
            Constraint::Length(1), // footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    DashboardLayout {
        header: rows[0],
        counter: rows[1],
        terminal: body[0],
        analysis: body[1],
        footer: rows[3],
    }
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
