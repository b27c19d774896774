//! # Linepick
//!
//! A full-screen terminal menu with fuzzy search and free-text input.
//!
//! A [`Menu`] presents candidate lines, lets the user navigate (Browse),
//! fuzzy-filter (`/`, Search), or type free text (`:`, Input), and
//! returns the single confirmed selection.
//!
//! ## Core Concepts
//!
//! - **Three modes**: Browse navigates, Search filters with live fuzzy
//!   highlights, Input captures literal text
//! - **Differential rendering**: Browse-mode cursor moves repaint two
//!   rows, not the screen; frames flush in one syscall
//! - **Merged cancellation**: the run loop `select!`s over input events
//!   and a cancel handle, so external shutdown is bounded
//!
//! ## Example
//!
//! ```rust,ignore
//! use linepick::Menu;
//!
//! let mut menu: Menu = Menu::new()?;
//! menu.set_title("Pick a fruit");
//! menu.append_lines(["apple", "banana", "grape"])?;
//! menu.run()?;
//!
//! if let Some(chosen) = menu.chosen() {
//!     println!("{}: {}", chosen.index.unwrap(), chosen.content);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod matcher;
pub mod menu;
pub mod style;
pub mod terminal;
pub mod width;
pub mod workflow;

// Re-exports for convenience
pub use error::{Error, Result};
pub use matcher::{MatchGateway, MatchedLine};
pub use menu::{CancelHandle, Chosen, Line, Menu, Mode, Slot, TextBuffer};
pub use style::{Modifiers, Rgb, Style, Theme};
pub use terminal::{Event, Key, Screen, TermScreen};
pub use workflow::{run_workflow, SimpleWorkflow, Workflow};
