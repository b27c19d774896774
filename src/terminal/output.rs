//! `OutputBuffer`: single-syscall output buffer for ANSI sequences.

use crate::style::{Modifiers, Style};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output for a frame is accumulated here, then flushed in a single
/// `write()` syscall to prevent terminal flickering.
pub(crate) struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Check if buffer is empty.
    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a rune (UTF-8 encoded).
    #[inline]
    pub(crate) fn write_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.data
            .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Move cursor to (x, y) position (0-indexed; ANSI is 1-indexed).
    #[inline]
    pub(crate) fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    /// Hide cursor.
    #[inline]
    pub(crate) fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub(crate) fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Reset attributes and emit the full SGR sequence for a style.
    pub(crate) fn set_style(&mut self, style: Style) {
        self.data.extend_from_slice(b"\x1b[0m");
        let mods = style.modifiers;
        if mods.contains(Modifiers::BOLD) {
            self.data.extend_from_slice(b"\x1b[1m");
        }
        if mods.contains(Modifiers::DIM) {
            self.data.extend_from_slice(b"\x1b[2m");
        }
        if mods.contains(Modifiers::ITALIC) {
            self.data.extend_from_slice(b"\x1b[3m");
        }
        if mods.contains(Modifiers::UNDERLINE) {
            self.data.extend_from_slice(b"\x1b[4m");
        }
        if mods.contains(Modifiers::REVERSED) {
            self.data.extend_from_slice(b"\x1b[7m");
        }
        if let Some(fg) = style.fg {
            let _ = write!(self.data, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
        }
        if let Some(bg) = style.bg {
            let _ = write!(self.data, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
        }
    }

    /// Reset all attributes.
    #[inline]
    pub(crate) fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub(crate) fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub(crate) fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}
