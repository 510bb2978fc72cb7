mod input;
mod render;
mod state;

use crate::app::AppState;
use crate::clock::TimeOfDay;
use crate::runtime::TickerHandle;
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{QueueableCommand, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use std::io::{self, Stdout, Write};
use std::time::Instant;

use input::{handle_help_key, handle_normal_key};
use render::{draw_clock, draw_footer, draw_header, draw_help_popup, draw_terminal_too_small};
use state::{InputMode, fits};

pub fn run_ui(
    app: &mut AppState,
    tick_rx: Receiver<TimeOfDay>,
    mut ticker: TickerHandle,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, &tick_rx, &ticker);

    ticker.stop();
    cleanup_terminal(&mut terminal)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rx: &Receiver<TimeOfDay>,
    ticker: &TickerHandle,
) -> io::Result<()> {
    let mut input_mode = InputMode::Normal;
    let mut should_quit = false;
    let mut dirty = true;
    let mut last_tick = Instant::now();

    while !should_quit {
        while let Ok(time) = tick_rx.try_recv() {
            dirty |= app.apply_time(time);
        }

        if dirty {
            terminal.draw(|frame| draw(frame, app, input_mode))?;
            dirty = false;
        }

        let tick_rate = app.display.tick_interval();
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    match input_mode {
                        InputMode::Normal => {
                            should_quit =
                                handle_normal_key(key, app, &mut input_mode, &ticker.sender);
                        }
                        InputMode::Help => handle_help_key(key, &mut input_mode),
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn draw(frame: &mut ratatui::Frame, app: &AppState, input_mode: InputMode) {
    let size = frame.area();

    if !fits(size.width, size.height) {
        draw_terminal_too_small(frame, size, app);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Clock
        Constraint::Length(1), // Footer
    ])
    .split(size);

    draw_header(frame, chunks[0], app);
    draw_clock(frame, chunks[1], app);
    draw_footer(frame, chunks[2], input_mode);

    if input_mode == InputMode::Help {
        draw_help_popup(frame, size);
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().queue(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    terminal.backend_mut().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
