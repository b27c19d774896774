//! Styles: colors, modifiers, and the per-menu theme.
//!
//! Every menu instance owns its own [`Theme`]; there is no process-wide
//! mutable style state. A [`Style`] with `fg`/`bg` left as `None` renders
//! with the terminal's default colors.

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Yellow (255, 255, 0)
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A cell style: optional colors plus modifiers.
///
/// `None` colors mean "terminal default", which keeps the menu readable
/// on both light and dark terminals without guessing a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color (`None` = terminal default).
    pub fg: Option<Rgb>,
    /// Background color (`None` = terminal default).
    pub bg: Option<Rgb>,
    /// Text modifiers.
    pub modifiers: Modifiers,
}

impl Style {
    /// A style with default colors and no modifiers.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the foreground color.
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold modifier.
    pub const fn bold(mut self) -> Self {
        self.modifiers = self.modifiers.union(Modifiers::BOLD);
        self
    }

    /// Add the italic modifier.
    pub const fn italic(mut self) -> Self {
        self.modifiers = self.modifiers.union(Modifiers::ITALIC);
        self
    }

    /// Add the underline modifier.
    pub const fn underline(mut self) -> Self {
        self.modifiers = self.modifiers.union(Modifiers::UNDERLINE);
        self
    }

    /// Add the reversed modifier.
    pub const fn reversed(mut self) -> Self {
        self.modifiers = self.modifiers.union(Modifiers::REVERSED);
        self
    }
}

/// The set of styles a menu renders with.
///
/// Owned by each [`crate::Menu`] instance; mutate it through
/// [`crate::Menu::theme_mut`] before starting the run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Title row.
    pub title: Style,
    /// Plain content rows.
    pub content: Style,
    /// The chosen row (and its gutter arrow).
    pub chosen: Style,
    /// The gutter column of non-chosen content rows.
    pub gutter: Style,
    /// The query/input prompt row.
    pub prompt: Style,
    /// Matched-rune highlight, layered over content in Search mode.
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let content = Style::new();
        Self {
            title: content.bold().italic(),
            content,
            chosen: content.fg(Rgb::YELLOW).bold(),
            gutter: content,
            prompt: content.italic(),
            highlight: content.bold().reversed(),
        }
    }
}
