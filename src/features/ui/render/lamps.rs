use crate::app::AppState;
use crate::clock::Row;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use super::super::state::CLOCK_WIDTH;
use super::format::{DARK_LAMP, centered_columns, lamp_color};

const LAMP_HEIGHT: u16 = 3;
const BEACON_WIDTH: u16 = 8;

pub(in crate::features::ui) fn draw_clock(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let area = centered_columns(CLOCK_WIDTH, area);

    let mut constraints = vec![Constraint::Length(LAMP_HEIGHT); 1 + Row::ALL.len()];
    if app.display.show_text_clock {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).spacing(1).split(area);

    draw_beacon(frame, chunks[0], app);
    for (idx, row) in Row::ALL.into_iter().enumerate() {
        draw_row(frame, chunks[idx + 1], app, row);
    }

    if app.display.show_text_clock {
        let text = if app.text().is_empty() {
            "--:--:--"
        } else {
            app.text()
        };
        let style = if app.paused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        let paragraph = Paragraph::new(Line::styled(text, style)).alignment(Alignment::Center);
        frame.render_widget(paragraph, chunks[1 + Row::ALL.len()]);
    }
}

fn draw_beacon(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let color = if app.lamps().seconds_lit() {
        Color::Yellow
    } else {
        DARK_LAMP
    };
    let beacon = centered_columns(BEACON_WIDTH, area);
    frame.render_widget(Block::default().style(Style::default().bg(color)), beacon);
}

fn draw_row(frame: &mut ratatui::Frame, area: Rect, app: &AppState, row: Row) {
    let lamps = app.lamps().row(row);
    let cells = Layout::horizontal(vec![Constraint::Fill(1); lamps.len()])
        .spacing(1)
        .split(area);

    for (idx, (&value, cell)) in lamps.iter().zip(cells.iter()).enumerate() {
        let style = Style::default().bg(lamp_color(row, idx, value));
        frame.render_widget(Block::default().style(style), *cell);
    }
}
