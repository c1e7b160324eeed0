//! Mapping from terminal events to game input events.

use crate::types::{InputEvent, ScreenPoint, Size};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a raw terminal event to a game input event.
///
/// Only key presses are considered (repeats and releases are dropped), and
/// only the left mouse button acts as the pointer.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerDown(ScreenPoint::new(column, row))),
        Event::Resize(width, height) => Some(InputEvent::Resize(Size::new(width, height))),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::CloseRequested);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
