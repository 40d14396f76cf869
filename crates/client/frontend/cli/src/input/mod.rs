//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Choice;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit a guess to the runtime.
    Choose(Choice),
    /// Play, Play Again or Try Again, depending on the screen.
    Confirm,
    /// Try Again on the error screen.
    Retry,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Up => KeyAction::Choose(Choice::Higher),
            KeyCode::Down => KeyAction::Choose(Choice::Lower),
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' | 'k' => KeyAction::Choose(Choice::Higher),
            'l' | 'j' => KeyAction::Choose(Choice::Lower),
            ' ' => KeyAction::Confirm,
            'r' => KeyAction::Retry,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_choice_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h'))),
            KeyAction::Choose(Choice::Higher)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('L'))),
            KeyAction::Choose(Choice::Lower)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up)),
            KeyAction::Choose(Choice::Higher)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down)),
            KeyAction::Choose(Choice::Lower)
        );
    }

    #[test]
    fn maps_confirm_retry_and_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' '))),
            KeyAction::Confirm
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('r'))), KeyAction::Retry);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let handler = InputHandler::new();
        let mut ctrl_c = key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);

        let mut ctrl_h = key(KeyCode::Char('h'));
        ctrl_h.modifiers = KeyModifiers::CONTROL;
        assert_eq!(handler.handle_key(ctrl_h), KeyAction::None);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Left)), KeyAction::None);
    }
}
