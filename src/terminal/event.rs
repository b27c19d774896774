//! Input events delivered by the terminal backend.
//!
//! This is a deliberately small subset of crossterm's event model: the
//! menu only reacts to key presses and resizes, so everything else is
//! filtered out at the conversion boundary.

use crossterm::event::{self, KeyEventKind};

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Enter/Return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// A printable rune.
    Char(char),
}

/// Events the backend delivers to the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(Key),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
}

/// Convert a crossterm event, dropping everything the menu ignores.
pub(crate) fn convert(event: event::Event) -> Option<Event> {
    match event {
        event::Event::Key(key) => {
            // Only key presses, not releases or repeats.
            if key.kind != KeyEventKind::Press {
                return None;
            }
            // Control/alt chords are not menu keys.
            if key
                .modifiers
                .intersects(event::KeyModifiers::CONTROL | event::KeyModifiers::ALT)
            {
                return None;
            }
            let key = match key.code {
                event::KeyCode::Char(c) => Key::Char(c),
                event::KeyCode::Up => Key::Up,
                event::KeyCode::Down => Key::Down,
                event::KeyCode::Left => Key::Left,
                event::KeyCode::Right => Key::Right,
                event::KeyCode::Enter => Key::Enter,
                event::KeyCode::Esc => Key::Esc,
                event::KeyCode::Backspace => Key::Backspace,
                event::KeyCode::Delete => Key::Delete,
                _ => return None,
            };
            Some(Event::Key(key))
        }
        event::Event::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_convert_press() {
        let ev = event::Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert_eq!(convert(ev), Some(Event::Key(Key::Char('a'))));
    }

    #[test]
    fn test_convert_drops_control_chords() {
        let ev = event::Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(convert(ev), None);
    }

    #[test]
    fn test_convert_resize() {
        let ev = event::Event::Resize(80, 24);
        assert_eq!(convert(ev), Some(Event::Resize(80, 24)));
    }
}
