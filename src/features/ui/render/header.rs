use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::InputMode;

pub(in crate::features::ui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let (status, status_style) = if app.paused {
        ("⏸ Paused", Style::default().fg(Color::Yellow))
    } else {
        ("▶ Live", Style::default().fg(Color::Green))
    };

    let header = Line::from(vec![
        Span::styled(
            " berlinuhr ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("Zone:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", app.display.utc_offset),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("│ "),
        Span::styled("Refresh:", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {}Hz ", app.display.refresh_hz),
            Style::default().fg(Color::White),
        ),
        Span::raw("│ "),
        Span::styled(status, status_style),
        Span::styled(
            format!(" │ {} updates", app.conversions()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(header).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub(in crate::features::ui) fn draw_footer(
    frame: &mut ratatui::Frame,
    area: Rect,
    mode: InputMode,
) {
    let hints = match mode {
        InputMode::Normal => vec![
            ("q", "Quit"),
            ("?", "Help"),
            ("p", "Pause"),
            ("t", "Text"),
            ("+/-", "Zone"),
        ],
        InputMode::Help => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}
