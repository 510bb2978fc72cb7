use super::draw;
use super::state::InputMode;
use crate::app::AppState;
use crate::config::{DisplayConfig, UtcOffset};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;

fn render(app: &AppState, mode: InputMode, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app, mode)).expect("draw");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cells_with_bg(buffer: &Buffer, color: Color) -> usize {
    buffer.content().iter().filter(|cell| cell.bg == color).count()
}

fn app_at(time: &str) -> AppState {
    let mut app = AppState::new(DisplayConfig::default());
    app.apply_time(time.parse().expect("valid time"));
    app
}

#[test]
fn midnight_draws_no_lit_lamps() {
    let buffer = render(&app_at("00:00:00"), InputMode::Normal, 80, 30);
    assert_eq!(cells_with_bg(&buffer, Color::Red), 0);
    assert_eq!(cells_with_bg(&buffer, Color::Yellow), 0);
    assert!(screen_text(&buffer).contains("00:00:00"));
}

#[test]
fn lit_lamps_are_coloured() {
    let buffer = render(&app_at("17:49:21"), InputMode::Normal, 80, 30);
    assert!(cells_with_bg(&buffer, Color::Red) > 0);
    assert!(cells_with_bg(&buffer, Color::Yellow) > 0);

    let text = screen_text(&buffer);
    assert!(text.contains("17:49:21"));
    assert!(text.contains("berlinuhr"));
}

#[test]
fn more_lamps_lit_means_more_coloured_cells() {
    let early = render(&app_at("01:00:00"), InputMode::Normal, 80, 30);
    let late = render(&app_at("04:00:00"), InputMode::Normal, 80, 30);
    assert!(cells_with_bg(&late, Color::Red) > cells_with_bg(&early, Color::Red));
}

#[test]
fn text_clock_can_be_hidden() {
    let mut app = app_at("12:34:56");
    app.toggle_text_clock();
    let buffer = render(&app, InputMode::Normal, 80, 30);
    assert!(!screen_text(&buffer).contains("12:34:56"));
}

#[test]
fn paused_state_shows_in_header() {
    let mut app = app_at("12:00:00");
    app.toggle_pause();
    let buffer = render(&app, InputMode::Normal, 80, 30);
    assert!(screen_text(&buffer).contains("Paused"));
}

#[test]
fn header_counts_updates_and_shows_zone() {
    let mut app = app_at("12:00:00");
    app.apply_time("12:00:01".parse().expect("valid time"));
    app.set_offset(UtcOffset::Fixed { minutes: 90 });
    let text = screen_text(&render(&app, InputMode::Normal, 100, 30));
    assert!(text.contains("2 updates"));
    assert!(text.contains("UTC+01:30"));
}

#[test]
fn help_overlay_lists_keys() {
    let buffer = render(&app_at("12:00:00"), InputMode::Help, 80, 30);
    let text = screen_text(&buffer);
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Shift the zone by one hour"));
}

#[test]
fn small_terminal_falls_back_to_text_clock() {
    let buffer = render(&app_at("17:49:21"), InputMode::Normal, 30, 12);
    let text = screen_text(&buffer);
    assert!(text.contains("17:49:21"));
    assert!(text.contains("R R R ."));
    assert_eq!(cells_with_bg(&buffer, Color::Red), 0);
}
