use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Pause,
    Quit,
}

/// Maps a key press to a game command. Keys we don't know are dropped here
/// so the game only ever sees valid directions.
pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Move(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Right)),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Pause),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn wasd_and_arrows_move() {
        assert_eq!(command_for(&key(KeyCode::Char('w'))), Some(Command::Move(Up)));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::Move(Down)));
        assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::Move(Left)));
        assert_eq!(command_for(&key(KeyCode::Right)), Some(Command::Move(Right)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for(&key(KeyCode::Char('q'))), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn plain_c_and_unknown_keys_are_ignored() {
        assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn esc_pauses() {
        assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Pause));
    }
}
