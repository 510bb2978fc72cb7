use crate::clock::Row;
use crate::common::lamps::{LampColour, lamp_colour};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

pub(super) const DARK_LAMP: Color = Color::DarkGray;

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Horizontally centred strip of at most `width` columns.
pub(super) fn centered_columns(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

pub(super) fn lamp_color(row: Row, index: usize, value: u8) -> Color {
    if value != 1 {
        return DARK_LAMP;
    }
    match lamp_colour(row, index) {
        LampColour::Red => Color::Red,
        LampColour::Yellow => Color::Yellow,
    }
}
