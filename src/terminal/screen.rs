//! `TermScreen`: the crossterm-backed production screen.
//!
//! Owns the raw-mode/alternate-screen terminal state, the input actor
//! thread, and two cell grids. `show` diffs the pending grid against the
//! visible one and flushes the difference in a single write, so partial
//! repaints cost output proportional to what changed.

use super::event::Event;
use super::grid::{Cell, Grid};
use super::input::InputActor;
use super::output::OutputBuffer;
use super::Screen;
use crate::style::Style;
use crate::width::rune_width;
use crossbeam_channel::{bounded, Receiver};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// The crossterm-backed terminal screen.
pub struct TermScreen {
    /// What the terminal currently shows.
    current: Grid,
    /// The frame being built.
    next: Grid,
    /// Pre-allocated ANSI output buffer.
    out: OutputBuffer,
    /// Terminal handle.
    stdout: Stdout,
    /// Input polling thread.
    input: InputActor,
    /// Event stream fed by the input actor.
    events: Receiver<Event>,
    /// Cursor to place after the next flush (`None` = hidden).
    cursor: Option<(u16, u16)>,
    /// Emit the whole pending grid on the next flush.
    needs_full: bool,
    /// Terminal state already released.
    finished: bool,
}

impl TermScreen {
    /// Enter raw mode and the alternate screen, and start the input
    /// actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured; raw mode
    /// is rolled back so no partial state is left behind.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        let (tx, rx) = bounded::<Event>(64);
        let input = InputActor::spawn(tx, Duration::from_millis(10));

        Ok(Self {
            current: Grid::new(width, height),
            next: Grid::new(width, height),
            out: OutputBuffer::with_capacity(4096),
            stdout,
            input,
            events: rx,
            cursor: None,
            needs_full: true,
            finished: false,
        })
    }
}

impl Screen for TermScreen {
    fn size(&self) -> (u16, u16) {
        (self.next.width(), self.next.height())
    }

    fn clear(&mut self) {
        self.next.fill_empty();
    }

    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) {
        self.next.set(
            x,
            y,
            Cell {
                ch: Some(ch),
                combining: combining.to_vec(),
                style,
            },
        );
        if rune_width(ch) == 2 {
            self.next.set(x + 1, y, Cell::continuation(style));
        }
    }

    fn show(&mut self) -> io::Result<()> {
        self.out.clear();
        if self.needs_full {
            self.out.reset_attrs();
            self.out.clear_screen();
        }

        let mut last_style: Option<Style> = None;
        let mut pen: Option<(u16, u16)> = None;

        for y in 0..self.next.height() {
            for x in 0..self.next.width() {
                let Some(cell) = self.next.get(x, y) else {
                    continue;
                };
                if cell.is_continuation() {
                    continue;
                }
                if self.needs_full {
                    // The screen was just cleared; empty cells are free.
                    if *cell == Cell::empty() {
                        continue;
                    }
                } else if self.current.get(x, y) == Some(cell) {
                    continue;
                }

                if pen != Some((x, y)) {
                    self.out.cursor_move(x, y);
                }
                if last_style != Some(cell.style) {
                    self.out.set_style(cell.style);
                    last_style = Some(cell.style);
                }
                let ch = cell.ch.unwrap_or(' ');
                self.out.write_char(ch);
                for &mark in &cell.combining {
                    self.out.write_char(mark);
                }
                #[allow(clippy::cast_possible_truncation)]
                let advance = rune_width(ch).max(1) as u16;
                pen = Some((x + advance, y));
            }
        }

        self.out.reset_attrs();
        match self.cursor {
            Some((x, y)) => {
                self.out.cursor_move(x, y);
                self.out.cursor_show();
            }
            None => self.out.cursor_hide(),
        }

        if !self.out.is_empty() {
            self.out.flush_to(&mut self.stdout)?;
        }

        self.current.copy_from(&self.next);
        self.needs_full = false;
        Ok(())
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn sync(&mut self) {
        if let Ok((width, height)) = terminal::size() {
            self.current.resize(width, height);
            self.next.resize(width, height);
        }
        self.needs_full = true;
    }

    fn finalize(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.input.join();
        let _ = execute!(
            self.stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    fn events(&self) -> &Receiver<Event> {
        &self.events
    }
}

impl Drop for TermScreen {
    fn drop(&mut self) {
        self.finalize();
    }
}
