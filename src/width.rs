//! Rune metrics: on-screen display width of runes and strings.
//!
//! Column math throughout the crate goes through this module so that
//! wide (CJK) and zero-width (combining) runes never desynchronize the
//! cursor position from what the terminal actually shows.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A rune prepared for a cell write.
///
/// Zero-width runes are redirected to render as a space occupying one
/// cell, with the original rune attached as a combining mark on that
/// same cell. This keeps combining diacritics from breaking column math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRune {
    /// The rune to place in the cell.
    pub ch: char,
    /// Columns the cell occupies (1 or 2).
    pub width: usize,
    /// Combining mark attached to the cell, if the input was zero-width.
    pub combining: Option<char>,
}

/// Display width of a single rune (0 for combining marks, 2 for wide CJK).
#[inline]
pub fn rune_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Display width of a string, summing rune widths.
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Prepare a rune for a cell write, normalizing zero-width runes.
pub fn cell_rune(ch: char) -> CellRune {
    match rune_width(ch) {
        0 => CellRune {
            ch: ' ',
            width: 1,
            combining: Some(ch),
        },
        w => CellRune {
            ch,
            width: w,
            combining: None,
        },
    }
}

/// Number of cells a rune occupies when rendered by this crate.
///
/// Unlike [`rune_width`], zero-width runes count as 1 because they are
/// rendered as a space carrying the combining mark.
#[inline]
pub fn render_width(ch: char) -> usize {
    rune_width(ch).max(1)
}

/// Cell offset of a rune-cursor position within a rune slice.
///
/// This is the column math behind the blinking-cursor placement on the
/// query/input prompt rows.
pub fn cell_offset(runes: &[char]) -> usize {
    runes.iter().copied().map(render_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(rune_width('a'), 1);
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn test_wide_width() {
        assert_eq!(rune_width('日'), 2);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_combining_is_zero_width() {
        // U+0301 COMBINING ACUTE ACCENT
        assert_eq!(rune_width('\u{0301}'), 0);
    }

    #[test]
    fn test_cell_rune_normalizes_combining() {
        let cr = cell_rune('\u{0301}');
        assert_eq!(cr.ch, ' ');
        assert_eq!(cr.width, 1);
        assert_eq!(cr.combining, Some('\u{0301}'));

        let plain = cell_rune('x');
        assert_eq!(plain.ch, 'x');
        assert_eq!(plain.width, 1);
        assert_eq!(plain.combining, None);
    }

    #[test]
    fn test_cell_offset_mixed() {
        // 'a' (1) + '日' (2) + combining (renders as 1)
        let runes = ['a', '日', '\u{0301}'];
        assert_eq!(cell_offset(&runes), 4);
        assert_eq!(cell_offset(&runes[..1]), 1);
        assert_eq!(cell_offset(&[]), 0);
    }
}
