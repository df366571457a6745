//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Tab | KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ViewScoreboard),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(GameAction::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_and_vi_keys() {
        assert_eq!(key(KeyCode::Char('W')), Some(GameAction::Turn(Direction::Up)));
        assert_eq!(key(KeyCode::Char('a')), Some(GameAction::Turn(Direction::Left)));
        assert_eq!(key(KeyCode::Char('j')), Some(GameAction::Turn(Direction::Down)));
        assert_eq!(key(KeyCode::Char('L')), Some(GameAction::Turn(Direction::Right)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::TogglePause));
        assert_eq!(key(KeyCode::Char('p')), Some(GameAction::TogglePause));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(key(KeyCode::Tab), Some(GameAction::ViewScoreboard));
        assert_eq!(key(KeyCode::Char('v')), Some(GameAction::ViewScoreboard));
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(key(KeyCode::Esc), Some(GameAction::Quit));
    }
}
