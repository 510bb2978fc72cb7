use crate::app::AppState;
use crate::text::render_text;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use super::super::super::state::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

/// Falls back to the character clock when the lamps do not fit.
pub(in crate::features::ui) fn draw_terminal_too_small(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &AppState,
) {
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::styled(
            if app.text().is_empty() { "--:--:--" } else { app.text() },
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(
        render_text(app.lamps())
            .lines()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(Color::Yellow))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}x{}", area.width, area.height),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!(" < {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
