use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;
use crate::snake::Direction::*;

/// Arrow keys or WASD to move, R to restart, Q / Esc / Ctrl+Q to quit,
/// Ctrl+C to leave at once. Releases and unknown keys map to `None`.
pub fn command_for_key(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }

    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        return match ev.code {
            KeyCode::Char('c') => Some(Command::Interrupt),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };

    Some(command)
}
