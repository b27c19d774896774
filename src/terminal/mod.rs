//! Terminal backend: the capability the menu renders through.
//!
//! The menu core talks to a [`Screen`] trait: cell writes, cursor
//! control, a frame flush, and an event stream. The production backend
//! is [`TermScreen`] (crossterm raw mode + alternate screen, with a
//! double-buffered grid flushed in one syscall); tests substitute a
//! scripted fake.

mod event;
mod grid;
mod input;
mod output;
mod screen;

pub use event::{Event, Key};
pub use grid::{Cell, Grid};
pub use screen::TermScreen;

use crate::style::Style;
use crossbeam_channel::Receiver;
use std::io;

/// The terminal capability the menu core depends on.
///
/// Coordinates are 0-indexed cells. `finalize` must be idempotent: both
/// the normal exit path and the panic-recovery path call it.
pub trait Screen {
    /// Current size in (columns, rows).
    fn size(&self) -> (u16, u16);

    /// Reset the pending frame to empty cells.
    fn clear(&mut self);

    /// Write a rune (plus combining marks) at a cell with a style.
    ///
    /// Wide runes occupy two columns; the implementation owns the
    /// continuation bookkeeping. Out-of-bounds writes are dropped.
    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style);

    /// Flush the pending frame to the terminal.
    fn show(&mut self) -> io::Result<()>;

    /// Hide the terminal cursor on the next flush.
    fn hide_cursor(&mut self);

    /// Show the terminal cursor at a cell on the next flush.
    fn show_cursor(&mut self, x: u16, y: u16);

    /// Re-read the terminal size and force a full repaint on the next
    /// flush. Called after a resize event.
    fn sync(&mut self);

    /// Release the terminal. Safe to call more than once.
    fn finalize(&mut self);

    /// The stream of input events this screen produces.
    fn events(&self) -> &Receiver<Event>;
}
