//! Error types for menu construction, configuration, and the run loop.

use crate::menu::Slot;
use std::io;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or running a menu.
#[derive(Debug, Error)]
pub enum Error {
    /// The terminal backend could not be started (raw mode, alternate
    /// screen). No partial terminal state is left behind.
    #[error("terminal initialization failed: {0}")]
    Init(#[source] io::Error),

    /// A terminal write failed during the run loop.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// A key slot was bound twice while wiring the dispatcher. This is
    /// an internal wiring bug and is surfaced before the run loop starts.
    #[error("key {0:?} is bound twice")]
    DuplicateBinding(Slot),

    /// Raw-line setters and payload items were mixed on one menu.
    #[error("raw line setters and payload items cannot be mixed")]
    MixedLineApi,

    /// The input event channel closed while the run loop was waiting.
    #[error("event channel disconnected")]
    Disconnected,

    /// A key handler panicked; the terminal was restored and the panic
    /// payload captured.
    #[error("menu loop panicked: {0}")]
    Panicked(String),
}
