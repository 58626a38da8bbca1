//! Keyboard input handling for terminal front ends

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calculator::Calculator;
use crate::core::InputEvent;

/// What a key press asks the front end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the calculator
    Press(InputEvent),
    /// Leave the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(InputEvent::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => {
                InputEvent::from_key(c).map_or(KeyAction::None, KeyAction::Press)
            }
            KeyCode::Enter => KeyAction::Press(InputEvent::Equals),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(InputEvent::Clear),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Handles a key against a calculator; returns true if the front end
    /// should quit
    pub fn dispatch(&self, event: KeyEvent, calculator: &mut Calculator) -> bool {
        match self.handle_key(event) {
            KeyAction::Press(input) => {
                calculator.press(input);
                false
            }
            KeyAction::Quit => true,
            KeyAction::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Constructor tests =====

    #[test]
    fn test_input_handler_new() {
        let handler = InputHandler::new();
        let _ = format!("{:?}", handler);
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (value, c) in ('0'..='9').enumerate() {
            let expected = InputEvent::digit(value as u8).unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(expected)
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            let event = key_event(KeyCode::Char(op.ascii_symbol()));
            assert_eq!(
                handler.handle_key(event),
                KeyAction::Press(InputEvent::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_percent_and_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Press(InputEvent::Percent)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Press(InputEvent::DecimalPoint)
        );
    }

    #[test]
    fn test_handle_unmapped_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('('))),
            KeyAction::None
        );
    }

    // ===== Special key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(InputEvent::Equals)
        );
    }

    #[test]
    fn test_handle_backspace_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Press(InputEvent::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            KeyAction::Press(InputEvent::Clear)
        );
    }

    #[test]
    fn test_handle_escape_quits() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_handle_other_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
    }

    // ===== Ctrl combination tests =====

    #[test]
    fn test_handle_ctrl_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_l_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Press(InputEvent::Clear)
        );
    }

    #[test]
    fn test_handle_ctrl_other() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('5'))),
            KeyAction::None
        );
    }

    // ===== Dispatch tests =====

    #[test]
    fn test_dispatch_drives_calculator() {
        let handler = InputHandler::new();
        let mut calc = Calculator::new();
        for code in [
            KeyCode::Char('6'),
            KeyCode::Char('*'),
            KeyCode::Char('7'),
            KeyCode::Enter,
        ] {
            assert!(!handler.dispatch(key_event(code), &mut calc));
        }
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_dispatch_quit() {
        let handler = InputHandler::new();
        let mut calc = Calculator::new();
        assert!(handler.dispatch(key_event(KeyCode::Esc), &mut calc));
        assert!(calc.state().is_initial());
    }
}
