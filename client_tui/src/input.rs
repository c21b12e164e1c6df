use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::PaddleDir;

/// One decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(PaddleDir),
    Quit,
}

/// Map a key press to an action, if it has one.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Action::Move(PaddleDir::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::Move(PaddleDir::Down)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Drain every pending terminal event without blocking.
pub fn poll_actions() -> io::Result<Vec<Action>> {
    let mut actions = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = map_key(key) {
                actions.push(action);
            }
        }
    }
    Ok(actions)
}

/// Block until the next key press; unmapped keys simply continue.
pub fn wait_for_key() -> io::Result<Action> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            return Ok(map_key(key).unwrap_or(Action::Move(PaddleDir::Still)));
        }
    }
}
