//! Screen renderer: deterministic mapping from menu state to cell writes.
//!
//! Layout per frame:
//!
//! ```text
//! row 0              title
//! row 1 (Search)     /query        <- terminal cursor on this row
//! row 1 (Input)      :input        <- terminal cursor on this row
//! content rows       ▸ chosen line / plain lines (2-cell gutter)
//! final row          <visible>/<total>
//! ```
//!
//! Browse mode carries a partial-repaint optimization: when the content
//! revision is unchanged since the last frame, only the previously
//! chosen and newly chosen rows are repainted. Search and Input repaint
//! the whole frame because the filtered set or prompt row changes on
//! every keystroke.

use super::textbuf::TextBuffer;
use super::{Line, Mode};
use crate::matcher::MatchedLine;
use crate::style::{Style, Theme};
use crate::terminal::Screen;
use crate::width::cell_rune;
use std::io;

/// Gutter columns reserved for the arrow glyph.
const GUTTER: u16 = 2;
/// The chosen-row marker.
const ARROW: char = '▸';
/// Search-mode prompt marker.
const SEARCH_MARKER: char = '/';
/// Input-mode prompt marker.
const INPUT_MARKER: char = ':';

/// Everything the renderer reads for one frame.
pub(crate) struct View<'a, P> {
    pub mode: Mode,
    pub revision: u64,
    pub cursor_y: usize,
    pub title: &'a str,
    pub lines: &'a [Line<P>],
    pub matched: &'a [MatchedLine],
    pub query: &'a TextBuffer,
    pub input: &'a TextBuffer,
    pub theme: &'a Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameKey {
    mode: Mode,
    revision: u64,
    cursor_y: usize,
}

/// The renderer and its last-frame memory.
pub(crate) struct Renderer {
    last: Option<FrameKey>,
}

impl Renderer {
    pub(crate) const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last frame, forcing the next render to repaint fully.
    pub(crate) fn invalidate(&mut self) {
        self.last = None;
    }

    /// Paint the current state and flush it.
    pub(crate) fn render<P, S: Screen>(
        &mut self,
        view: &View<'_, P>,
        screen: &mut S,
    ) -> io::Result<()> {
        let key = FrameKey {
            mode: view.mode,
            revision: view.revision,
            cursor_y: view.cursor_y,
        };

        if view.mode == Mode::Browse {
            if let Some(last) = self.last {
                if last.mode == Mode::Browse && last.revision == view.revision {
                    if last.cursor_y != view.cursor_y {
                        paint_content_row(screen, view, last.cursor_y, false);
                        paint_content_row(screen, view, view.cursor_y, true);
                    }
                    screen.show()?;
                    self.last = Some(key);
                    return Ok(());
                }
            }
        }

        self.render_full(view, screen)?;
        self.last = Some(key);
        Ok(())
    }

    fn render_full<P, S: Screen>(&self, view: &View<'_, P>, screen: &mut S) -> io::Result<()> {
        screen.clear();
        put_str(screen, 0, 0, view.title, view.theme.title);

        match view.mode {
            Mode::Browse => {
                for i in 0..view.lines.len() {
                    paint_content_row(screen, view, i, i == view.cursor_y);
                }
                screen.hide_cursor();
            }
            Mode::Search => {
                paint_prompt_row(screen, view, SEARCH_MARKER, view.query);
                for i in 0..view.matched.len() {
                    paint_content_row(screen, view, i, i == view.cursor_y);
                }
            }
            Mode::Input => {
                paint_prompt_row(screen, view, INPUT_MARKER, view.input);
                for i in 0..view.lines.len() {
                    paint_content_row(screen, view, i, false);
                }
            }
        }

        paint_statistic(screen, view);
        screen.show()
    }
}

/// Row index of a content line for the current mode.
fn content_y(mode: Mode, idx: usize) -> u16 {
    let base = if mode == Mode::Browse { 1 } else { 2 };
    u16::try_from(idx + base).unwrap_or(u16::MAX)
}

/// Paint one content row: gutter, arrow for the chosen row, highlight
/// styling at matched rune positions in Search mode.
fn paint_content_row<P, S: Screen>(screen: &mut S, view: &View<'_, P>, idx: usize, chosen: bool) {
    let theme = view.theme;
    let y = content_y(view.mode, idx);

    let (content, positions): (&str, &[usize]) = match view.mode {
        Mode::Search => {
            let Some(m) = view.matched.get(idx) else {
                return;
            };
            (&m.content, &m.positions)
        }
        Mode::Browse | Mode::Input => {
            let Some(line) = view.lines.get(idx) else {
                return;
            };
            (&line.content, &[])
        }
    };

    if chosen {
        screen.set_content(0, y, ARROW, &[], theme.chosen);
        screen.set_content(1, y, ' ', &[], theme.chosen);
    } else {
        screen.set_content(0, y, ' ', &[], theme.gutter);
        screen.set_content(1, y, ' ', &[], theme.content);
    }

    let base = if chosen { theme.chosen } else { theme.content };
    let (width, _) = screen.size();
    let mut x = GUTTER;
    for (ri, ch) in content.chars().enumerate() {
        let cr = cell_rune(ch);
        #[allow(clippy::cast_possible_truncation)]
        let w = cr.width as u16;
        if x + w > width {
            break;
        }
        let style = if !chosen && positions.contains(&ri) {
            theme.highlight
        } else {
            base
        };
        let combining: &[char] = cr.combining.as_ref().map_or(&[], std::slice::from_ref);
        screen.set_content(x, y, cr.ch, combining, style);
        x += w;
    }
}

/// Paint the query/input row and place the terminal cursor on it.
fn paint_prompt_row<P, S: Screen>(screen: &mut S, view: &View<'_, P>, marker: char, buf: &TextBuffer) {
    let theme = view.theme;
    screen.set_content(0, 1, ' ', &[], theme.content);
    screen.set_content(1, 1, ' ', &[], theme.content);
    screen.set_content(GUTTER, 1, marker, &[], theme.prompt);

    let (width, _) = screen.size();
    let mut x = GUTTER + 1;
    for &ch in buf.runes() {
        let cr = cell_rune(ch);
        #[allow(clippy::cast_possible_truncation)]
        let w = cr.width as u16;
        if x + w > width {
            break;
        }
        let combining: &[char] = cr.combining.as_ref().map_or(&[], std::slice::from_ref);
        screen.set_content(x, 1, cr.ch, combining, theme.prompt);
        x += w;
    }

    let col = usize::from(GUTTER) + 1 + buf.cursor_cell();
    screen.show_cursor(u16::try_from(col).unwrap_or(u16::MAX).min(width), 1);
}

/// Paint the `<visible>/<total>` row under the content.
fn paint_statistic<P, S: Screen>(screen: &mut S, view: &View<'_, P>) {
    let total = view.lines.len();
    let (visible, offset) = match view.mode {
        Mode::Browse => (total, 1),
        Mode::Search => (view.matched.len(), 2),
        Mode::Input => (total, 2),
    };
    let y = u16::try_from(visible + offset).unwrap_or(u16::MAX);
    put_str(screen, 0, y, &format!("{visible}/{total}"), view.theme.content);
}

/// Write a string starting at (x, y), truncating at the screen edge.
fn put_str<S: Screen>(screen: &mut S, x: u16, y: u16, text: &str, style: Style) {
    let (width, _) = screen.size();
    let mut x = x;
    for ch in text.chars() {
        let cr = cell_rune(ch);
        #[allow(clippy::cast_possible_truncation)]
        let w = cr.width as u16;
        if x + w > width {
            break;
        }
        let combining: &[char] = cr.combining.as_ref().map_or(&[], std::slice::from_ref);
        screen.set_content(x, y, cr.ch, combining, style);
        x += w;
    }
}
