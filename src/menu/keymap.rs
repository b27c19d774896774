//! Key dispatcher: a fixed slot-to-handler table built once per menu.
//!
//! Binding the same slot twice is a setup-time error, never a silent
//! overwrite: duplicate bindings would make key behavior depend on
//! wiring order. Unbound slots are no-ops at dispatch time.

use crate::error::Error;
use crate::terminal::Key;
use std::collections::HashMap;

/// The dispatch slot a key resolves to.
///
/// Printable runes share the single `Rune` slot; the handler inspects
/// the rune itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Enter.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Any printable rune.
    Rune,
}

impl Slot {
    /// The slot a key dispatches through.
    pub const fn of(key: Key) -> Self {
        match key {
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Left => Self::Left,
            Key::Right => Self::Right,
            Key::Enter => Self::Enter,
            Key::Esc => Self::Esc,
            Key::Backspace => Self::Backspace,
            Key::Delete => Self::Delete,
            Key::Char(_) => Self::Rune,
        }
    }
}

/// A fixed mapping from slots to handlers.
pub(crate) struct Keymap<H> {
    map: HashMap<Slot, H>,
}

impl<H: Copy> Keymap<H> {
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind one handler to one or more slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateBinding`] if any slot already has a
    /// handler.
    pub(crate) fn bind(&mut self, handler: H, slots: &[Slot]) -> Result<(), Error> {
        for &slot in slots {
            if self.map.contains_key(&slot) {
                return Err(Error::DuplicateBinding(slot));
            }
            self.map.insert(slot, handler);
        }
        Ok(())
    }

    /// Look up the handler for a slot.
    pub(crate) fn find(&self, slot: Slot) -> Option<H> {
        self.map.get(&slot).copied()
    }
}
