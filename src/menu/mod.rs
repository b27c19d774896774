//! The menu core: mode state machine, edit buffers, and the run loop.
//!
//! A [`Menu`] starts in Browse mode over its full line set. `/` enters
//! Search mode (fuzzy filter with live highlights), `:` enters Input
//! mode (free text). Enter confirms, Esc backs out of a mode or, from
//! Browse, terminates unconfirmed.
//!
//! ```text
//!  ----------------- Browse -----------------
//! | Title:          |    | Title:            |
//! | ▸ first line    | /  | /que              |
//! |   second line   | -> | ▸ matched line    |
//! |   third line    |    |   matched line    |
//! | 3/3             |    | 2/3               |
//!  -----------------      -------------------
//! ```

mod keymap;
mod render;
mod textbuf;

pub use keymap::Slot;
pub use textbuf::TextBuffer;

use crate::error::{Error, Result};
use crate::matcher::{MatchGateway, MatchedLine};
use crate::style::Theme;
use crate::terminal::{Event, Key, Screen, TermScreen};
use keymap::Keymap;
use render::{Renderer, View};

use crossbeam_channel::{bounded, select, Receiver, Sender};
use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

/// The menu's interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigate the full line set.
    Browse,
    /// Fuzzy-filter lines against a live query.
    Search,
    /// Enter free text; the result is the text itself.
    Input,
}

/// One candidate line, with an optional caller payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<P> {
    /// The visible text.
    pub content: String,
    /// Opaque value carried through to [`Chosen::payload`].
    pub payload: Option<P>,
}

impl<P> Default for Line<P> {
    fn default() -> Self {
        Self {
            content: String::new(),
            payload: None,
        }
    }
}

/// The confirmed selection, read after [`Menu::run`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chosen<'a, P> {
    /// Index into the menu's line set; `None` when the selection came
    /// from Input mode (free text has no backing line).
    pub index: Option<usize>,
    /// The selected content (line text, or the typed text in Input mode).
    pub content: String,
    /// The payload of the selected line, if one was attached.
    pub payload: Option<&'a P>,
}

/// A clonable handle that terminates a running menu from outside.
///
/// Cancellation is multiplexed into the run loop's event wait, so it
/// takes effect within one loop iteration rather than on the next
/// keypress.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Sender<()>,
}

impl CancelHandle {
    /// Request termination; the menu exits unconfirmed.
    pub fn cancel(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Which line-population API this menu is committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineApi {
    Unset,
    Raw,
    Items,
}

type Handler<P, S> = fn(&mut Menu<P, S>, Key);

/// A full-screen selector over a set of candidate lines.
///
/// `P` is the payload type attached to lines via [`Menu::push_item`];
/// menus populated through the raw-line setters can leave it at the
/// default `()`.
pub struct Menu<P = (), S: Screen = TermScreen> {
    screen: S,
    keymap: Keymap<Handler<P, S>>,
    theme: Theme,
    title: String,
    lines: Vec<Line<P>>,
    line_api: LineApi,
    mode: Mode,
    cursor_y: usize,
    query: TextBuffer,
    input: TextBuffer,
    matched: Vec<MatchedLine>,
    matcher: MatchGateway,
    renderer: Renderer,
    /// Bumped whenever visible content (not just the cursor row)
    /// changes; the renderer keys its Browse partial repaint off it.
    revision: u64,
    confirmed: bool,
    shutdown: bool,
    cancel_tx: Sender<()>,
    cancel_rx: Receiver<()>,
}

impl<P> Menu<P> {
    /// Construct a menu on the process terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if the terminal backend cannot start; no
    /// partial terminal state is left behind.
    pub fn new() -> Result<Self> {
        let screen = TermScreen::new().map_err(Error::Init)?;
        Self::with_screen(screen)
    }
}

impl<P, S: Screen> Menu<P, S> {
    /// Construct a menu over a caller-provided screen backend.
    pub fn with_screen(screen: S) -> Result<Self> {
        let keymap = Self::bindings()?;
        let (cancel_tx, cancel_rx) = bounded(1);
        Ok(Self {
            screen,
            keymap,
            theme: Theme::default(),
            title: "Menu".to_string(),
            lines: Vec::new(),
            line_api: LineApi::Unset,
            mode: Mode::Browse,
            cursor_y: 0,
            query: TextBuffer::new(),
            input: TextBuffer::new(),
            matched: Vec::new(),
            matcher: MatchGateway::new(),
            renderer: Renderer::new(),
            revision: 0,
            confirmed: false,
            shutdown: false,
            cancel_tx,
            cancel_rx,
        })
    }

    /// The reserved key table. Backspace and Delete share one handler;
    /// every other slot gets exactly one. A duplicate here is an
    /// internal wiring bug and fails construction.
    fn bindings() -> Result<Keymap<Handler<P, S>>> {
        let mut keymap = Keymap::new();
        keymap.bind(Self::key_up as Handler<P, S>, &[Slot::Up])?;
        keymap.bind(Self::key_down as Handler<P, S>, &[Slot::Down])?;
        keymap.bind(Self::key_left as Handler<P, S>, &[Slot::Left])?;
        keymap.bind(Self::key_right as Handler<P, S>, &[Slot::Right])?;
        keymap.bind(Self::key_enter as Handler<P, S>, &[Slot::Enter])?;
        keymap.bind(Self::key_esc as Handler<P, S>, &[Slot::Esc])?;
        keymap.bind(
            Self::key_backspace as Handler<P, S>,
            &[Slot::Backspace, Slot::Delete],
        )?;
        keymap.bind(Self::key_rune as Handler<P, S>, &[Slot::Rune])?;
        Ok(keymap)
    }

    // --- configuration -----------------------------------------------

    /// Set the title row.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self.revision += 1;
        self
    }

    /// The menu's theme, for adjustment before the run loop starts.
    pub fn theme_mut(&mut self) -> &mut Theme {
        self.revision += 1;
        &mut self.theme
    }

    /// Set a line by index, growing the line set as needed (gaps are
    /// filled with empty lines). Resets the cursor row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedLineApi`] if this menu was populated via
    /// [`Menu::push_item`].
    pub fn set_line(&mut self, index: usize, content: impl Into<String>) -> Result<&mut Self> {
        self.use_raw_api()?;
        if index >= self.lines.len() {
            self.lines.resize_with(index + 1, Line::default);
        }
        self.lines[index].content = content.into();
        self.cursor_y = 0;
        self.revision += 1;
        Ok(self)
    }

    /// Replace all lines. Resets the cursor row.
    pub fn set_lines<I>(&mut self, lines: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.use_raw_api()?;
        self.lines = lines
            .into_iter()
            .map(|content| Line {
                content: content.into(),
                payload: None,
            })
            .collect();
        self.cursor_y = 0;
        self.revision += 1;
        Ok(self)
    }

    /// Append lines after the existing ones.
    pub fn append_lines<I>(&mut self, lines: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.use_raw_api()?;
        self.lines.extend(lines.into_iter().map(|content| Line {
            content: content.into(),
            payload: None,
        }));
        self.revision += 1;
        Ok(self)
    }

    /// Append a line carrying a payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MixedLineApi`] if this menu was populated via
    /// the raw-line setters.
    pub fn push_item(&mut self, content: impl Into<String>, payload: P) -> Result<&mut Self> {
        self.use_item_api()?;
        self.lines.push(Line {
            content: content.into(),
            payload: Some(payload),
        });
        self.revision += 1;
        Ok(self)
    }

    /// Drop all lines and any derived matches.
    pub fn clear_lines(&mut self) -> &mut Self {
        self.lines.clear();
        self.matched.clear();
        self.line_api = LineApi::Unset;
        self.cursor_y = 0;
        self.revision += 1;
        self
    }

    fn use_raw_api(&mut self) -> Result<()> {
        if self.line_api == LineApi::Items {
            return Err(Error::MixedLineApi);
        }
        self.line_api = LineApi::Raw;
        Ok(())
    }

    fn use_item_api(&mut self) -> Result<()> {
        if self.line_api == LineApi::Raw {
            return Err(Error::MixedLineApi);
        }
        self.line_api = LineApi::Items;
        Ok(())
    }

    // --- observation --------------------------------------------------

    /// The current interaction mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The current cursor row within the visible set.
    pub const fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    /// The matches derived from the last committed query edit.
    pub fn matches(&self) -> &[MatchedLine] {
        &self.matched
    }

    /// The confirmed selection, or `None` if the menu exited (or is
    /// still running) unconfirmed.
    pub fn chosen(&self) -> Option<Chosen<'_, P>> {
        if !self.confirmed {
            return None;
        }
        match self.mode {
            Mode::Input => Some(Chosen {
                index: None,
                content: self.input.text(),
                payload: None,
            }),
            Mode::Browse => self.lines.get(self.cursor_y).map(|line| Chosen {
                index: Some(self.cursor_y),
                content: line.content.clone(),
                payload: line.payload.as_ref(),
            }),
            Mode::Search => self.matched.get(self.cursor_y).map(|m| Chosen {
                index: Some(m.origin),
                content: m.content.clone(),
                payload: self
                    .lines
                    .get(m.origin)
                    .and_then(|line| line.payload.as_ref()),
            }),
        }
    }

    /// A handle that terminates the run loop from another thread.
    pub fn canceller(&self) -> CancelHandle {
        CancelHandle {
            tx: self.cancel_tx.clone(),
        }
    }

    // --- run loop ------------------------------------------------------

    /// Run the blocking interactive loop.
    ///
    /// Returns after Enter, a Browse-mode Escape, or cancellation. The
    /// terminal is released before this returns, including when a key
    /// handler panics (the panic is logged and surfaced as
    /// [`Error::Panicked`]).
    pub fn run(&mut self) -> Result<()> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.event_loop()));
        self.screen.finalize();
        match outcome {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!(
                    "menu loop panicked: {message}\n{}",
                    Backtrace::capture()
                );
                Err(Error::Panicked(message))
            }
        }
    }

    /// Release the terminal. Idempotent; also runs on drop of the
    /// screen backend.
    pub fn release(&mut self) {
        self.screen.finalize();
    }

    /// render → wait → dispatch, until shutdown. The wait multiplexes
    /// the event stream and the cancel channel in one `select!`.
    fn event_loop(&mut self) -> Result<()> {
        let events = self.screen.events().clone();
        let cancel = self.cancel_rx.clone();
        loop {
            if self.shutdown {
                return Ok(());
            }
            self.render_frame()?;
            select! {
                recv(events) -> event => match event {
                    Ok(Event::Key(key)) => self.dispatch(key),
                    Ok(Event::Resize(..)) => {
                        self.screen.sync();
                        self.renderer.invalidate();
                    }
                    Err(_) => return Err(Error::Disconnected),
                },
                recv(cancel) -> _ => return Ok(()),
            }
        }
    }

    fn render_frame(&mut self) -> Result<()> {
        let view = View {
            mode: self.mode,
            revision: self.revision,
            cursor_y: self.cursor_y,
            title: &self.title,
            lines: &self.lines,
            matched: &self.matched,
            query: &self.query,
            input: &self.input,
            theme: &self.theme,
        };
        self.renderer.render(&view, &mut self.screen)?;
        Ok(())
    }

    fn dispatch(&mut self, key: Key) {
        if let Some(handler) = self.keymap.find(Slot::of(key)) {
            handler(self, key);
        }
    }

    // --- key handlers ---------------------------------------------------

    fn key_up(&mut self, _key: Key) {
        match self.mode {
            // Browse wraps at the top.
            Mode::Browse => {
                if self.cursor_y > 0 {
                    self.cursor_y -= 1;
                } else {
                    self.cursor_y = self.lines.len().saturating_sub(1);
                }
            }
            // Search clamps.
            Mode::Search => self.cursor_y = self.cursor_y.saturating_sub(1),
            Mode::Input => {}
        }
    }

    fn key_down(&mut self, _key: Key) {
        match self.mode {
            Mode::Browse => {
                if self.cursor_y + 1 < self.lines.len() {
                    self.cursor_y += 1;
                } else {
                    self.cursor_y = 0;
                }
            }
            Mode::Search => {
                if self.cursor_y + 1 < self.matched.len() {
                    self.cursor_y += 1;
                }
            }
            Mode::Input => {}
        }
    }

    fn key_left(&mut self, _key: Key) {
        match self.mode {
            Mode::Search => self.query.move_left(),
            Mode::Input => self.input.move_left(),
            Mode::Browse => {}
        }
    }

    fn key_right(&mut self, _key: Key) {
        match self.mode {
            Mode::Search => self.query.move_right(),
            Mode::Input => self.input.move_right(),
            Mode::Browse => {}
        }
    }

    fn key_esc(&mut self, _key: Key) {
        match self.mode {
            Mode::Search => {
                self.query.clear();
                self.mode = Mode::Browse;
            }
            Mode::Input => {
                self.input.clear();
                self.mode = Mode::Browse;
            }
            Mode::Browse => self.shutdown = true,
        }
    }

    fn key_enter(&mut self, _key: Key) {
        // Enter on an empty visible set is a no-op, not a crash.
        let empty = match self.mode {
            Mode::Browse => self.lines.is_empty(),
            Mode::Search => self.matched.is_empty(),
            Mode::Input => false,
        };
        if empty {
            return;
        }
        self.confirmed = true;
        self.shutdown = true;
    }

    fn key_backspace(&mut self, _key: Key) {
        match self.mode {
            Mode::Search => {
                if self.query.backspace() {
                    self.cursor_y = 0;
                    self.recompute_matches();
                }
            }
            Mode::Input => {
                self.input.backspace();
            }
            Mode::Browse => {}
        }
    }

    fn key_rune(&mut self, key: Key) {
        let Key::Char(ch) = key else {
            return;
        };
        match self.mode {
            Mode::Browse => match ch {
                '/' => self.enter_search(),
                ':' => self.enter_input(),
                _ => {}
            },
            Mode::Search => {
                self.query.insert(ch);
                self.cursor_y = 0;
                self.recompute_matches();
            }
            Mode::Input => self.input.insert(ch),
        }
    }

    // --- transitions ------------------------------------------------------

    fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.query.clear();
        self.cursor_y = 0;
        // Identity copy of all lines until the first query rune lands.
        self.recompute_matches();
    }

    fn enter_input(&mut self) {
        self.mode = Mode::Input;
        self.input.clear();
        self.cursor_y = 0;
        self.revision += 1;
    }

    /// Rebuild `matched` from the current query, synchronously.
    fn recompute_matches(&mut self) {
        let query = self.query.text();
        self.matched = self
            .matcher
            .matches(self.lines.iter().map(|line| line.content.as_str()), &query);
        log::debug!(
            "query {query:?}: {} of {} lines match",
            self.matched.len(),
            self.lines.len()
        );
        self.revision += 1;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "opaque panic payload".to_string())
        },
        |s| (*s).to_string(),
    )
}
