use crate::app::AppState;
use crate::common::time::offset_minutes;
use crate::config::UtcOffset;
use crate::runtime::TickerControl;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::SystemTime;

use super::super::state::InputMode;

/// Returns true when the user asked to quit.
pub(in crate::features::ui) fn handle_normal_key(
    key: KeyEvent,
    app: &mut AppState,
    input_mode: &mut InputMode,
    ticker: &Sender<TickerControl>,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => {
            *input_mode = InputMode::Help;
        }
        KeyCode::Char('p') => {
            let paused = app.toggle_pause();
            if ticker.send(TickerControl::Pause(paused)).is_err() {
                tracing::warn!("ticker is gone, pause not forwarded");
            }
        }
        KeyCode::Char('t') => app.toggle_text_clock(),
        KeyCode::Char(c @ ('+' | '-')) => {
            let current = offset_minutes(app.display.utc_offset, SystemTime::now());
            let delta = if c == '+' { 60 } else { -60 };
            set_offset(app, UtcOffset::shifted_from(current, delta), ticker);
        }
        KeyCode::Char('z') => set_offset(app, UtcOffset::Local, ticker),
        _ => {}
    }
    false
}

fn set_offset(app: &mut AppState, offset: UtcOffset, ticker: &Sender<TickerControl>) {
    if app.set_offset(offset) && ticker.send(TickerControl::SetOffset(offset)).is_err() {
        tracing::warn!("ticker is gone, offset not forwarded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut app = AppState::new(DisplayConfig::default());
        let mut mode = InputMode::Normal;

        assert!(handle_normal_key(key(KeyCode::Char('q')), &mut app, &mut mode, &tx));
        assert!(handle_normal_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            &mut mode,
            &tx
        ));
        assert!(!handle_normal_key(key(KeyCode::Char('c')), &mut app, &mut mode, &tx));
    }

    #[test]
    fn pause_is_forwarded_to_ticker() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = AppState::new(DisplayConfig::default());
        let mut mode = InputMode::Normal;

        handle_normal_key(key(KeyCode::Char('p')), &mut app, &mut mode, &tx);
        assert!(app.paused);
        assert_eq!(rx.try_recv(), Ok(TickerControl::Pause(true)));

        handle_normal_key(key(KeyCode::Char('p')), &mut app, &mut mode, &tx);
        assert!(!app.paused);
        assert_eq!(rx.try_recv(), Ok(TickerControl::Pause(false)));
    }

    #[test]
    fn offset_keys_shift_by_an_hour_and_reach_the_ticker() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = AppState::new(DisplayConfig {
            utc_offset: UtcOffset::Fixed { minutes: 60 },
            ..DisplayConfig::default()
        });
        let mut mode = InputMode::Normal;

        handle_normal_key(key(KeyCode::Char('+')), &mut app, &mut mode, &tx);
        assert_eq!(app.display.utc_offset, UtcOffset::Fixed { minutes: 120 });
        assert_eq!(
            rx.try_recv(),
            Ok(TickerControl::SetOffset(UtcOffset::Fixed { minutes: 120 }))
        );

        handle_normal_key(key(KeyCode::Char('-')), &mut app, &mut mode, &tx);
        handle_normal_key(key(KeyCode::Char('-')), &mut app, &mut mode, &tx);
        assert_eq!(app.display.utc_offset, UtcOffset::UTC);
        assert_eq!(rx.try_iter().count(), 2);

        handle_normal_key(key(KeyCode::Char('z')), &mut app, &mut mode, &tx);
        assert_eq!(app.display.utc_offset, UtcOffset::Local);
        assert_eq!(rx.try_recv(), Ok(TickerControl::SetOffset(UtcOffset::Local)));

        handle_normal_key(key(KeyCode::Char('z')), &mut app, &mut mode, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn help_and_text_toggles() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut app = AppState::new(DisplayConfig::default());
        let mut mode = InputMode::Normal;

        handle_normal_key(key(KeyCode::Char('t')), &mut app, &mut mode, &tx);
        assert!(!app.display.show_text_clock);

        handle_normal_key(key(KeyCode::Char('?')), &mut app, &mut mode, &tx);
        assert_eq!(mode, InputMode::Help);
    }
}
