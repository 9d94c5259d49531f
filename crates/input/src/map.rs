//! Mapping from terminal events to game input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::types::{InputEvent, Key, Projection};

/// Map any terminal event. Events the game does not consume yield `None`.
pub fn map_event(event: &Event, projection: &Projection) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, projection),
        _ => None,
    }
}

/// Map pointer motion and any button release into canvas pixels.
pub fn map_mouse(mouse: MouseEvent, projection: &Projection) -> Option<InputEvent> {
    let (x, y) = projection.terminal_to_pixel(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved { x, y }),
        MouseEventKind::Up(_) => Some(InputEvent::PointerReleased { x, y }),
        _ => None,
    }
}

/// Map keyboard input.
///
/// Terminals report presses, not releases (unless the keyboard enhancement
/// protocol is on), so a press is surfaced as the key's release. Repeats and
/// real releases are dropped to keep one event per keystroke.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(InputEvent::CloseRequested);
    }
    let key = match key.code {
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(InputEvent::KeyReleased(key))
}

/// Check if key should close the game (the terminal's stand-in for closing a window).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
