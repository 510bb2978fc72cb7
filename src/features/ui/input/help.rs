use crossterm::event::{KeyCode, KeyEvent};

use super::super::state::InputMode;

pub(in crate::features::ui) fn handle_help_key(key: KeyEvent, input_mode: &mut InputMode) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            *input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn esc_closes_help() {
        let mut mode = InputMode::Help;
        handle_help_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &mut mode);
        assert_eq!(mode, InputMode::Help);
        handle_help_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut mode);
        assert_eq!(mode, InputMode::Normal);
    }
}
