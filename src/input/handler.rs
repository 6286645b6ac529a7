use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Intent};

/// Maps terminal key presses to session intents
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` for keys that mean nothing to the game
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Intent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Intent::Quit);
        }

        let intent = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Intent::Turn(Direction::Up),
            KeyCode::Down => Intent::Turn(Direction::Down),
            KeyCode::Left => Intent::Turn(Direction::Left),
            KeyCode::Right => Intent::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Intent::Turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::Turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Intent::Turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Intent::Turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Enter => Intent::Start,
            KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,

            _ => return None,
        };

        Some(intent)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(handler: &InputHandler, code: KeyCode) -> Option<Intent> {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Up), Some(Intent::Turn(Direction::Up)));
        assert_eq!(press(&handler, KeyCode::Down), Some(Intent::Turn(Direction::Down)));
        assert_eq!(press(&handler, KeyCode::Left), Some(Intent::Turn(Direction::Left)));
        assert_eq!(press(&handler, KeyCode::Right), Some(Intent::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('w')), Some(Intent::Turn(Direction::Up)));
        assert_eq!(press(&handler, KeyCode::Char('a')), Some(Intent::Turn(Direction::Left)));
        assert_eq!(press(&handler, KeyCode::Char('s')), Some(Intent::Turn(Direction::Down)));
        assert_eq!(press(&handler, KeyCode::Char('d')), Some(Intent::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            Some(Intent::Turn(Direction::Up))
        );
    }

    #[test]
    fn test_start_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char(' ')), Some(Intent::Start));
        assert_eq!(press(&handler, KeyCode::Enter), Some(Intent::Start));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('q')), Some(Intent::Quit));
        assert_eq!(press(&handler, KeyCode::Esc), Some(Intent::Quit));

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), Some(Intent::Quit));
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        assert_eq!(press(&handler, KeyCode::Char('r')), Some(Intent::Restart));

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), Some(Intent::Restart));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(press(&handler, KeyCode::Char('x')), None);
        assert_eq!(press(&handler, KeyCode::Tab), None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(Intent::Quit));
    }
}
