use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use super::super::format::centered_rect;

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Green)),
        Span::raw(action),
    ])
}

pub(in crate::features::ui) fn draw_help_popup(frame: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_rect(80, 80, area);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "  Keyboard Shortcuts  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key_line("p", "Pause/Resume the clock"),
        key_line("t", "Show/Hide the HH:MM:SS line"),
        key_line("+/-", "Shift the zone by one hour"),
        key_line("z", "Back to local time"),
        key_line("?", "Toggle this help"),
        key_line("q/Ctrl+C", "Quit"),
        Line::from(""),
        Line::styled("─── Reading the lamps ───", Style::default().fg(Color::Yellow)),
        Line::from("  Top lamp blinks every other second."),
        Line::from("  Row 1: 5 hours per lamp.  Row 2: 1 hour."),
        Line::from("  Row 3: 5 minutes per lamp (red = quarter)."),
        Line::from("  Row 4: 1 minute per lamp."),
        Line::from(""),
        Line::styled(
            "  Press Esc or ? to close  ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
