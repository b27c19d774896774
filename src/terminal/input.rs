//! Input actor: dedicated thread for polling terminal events.
//!
//! The thread polls crossterm with a short timeout so it can observe the
//! shutdown flag, converts events, and forwards them over a channel. The
//! run loop never touches crossterm's blocking reader directly, which is
//! what lets it `select!` over events and cancellation in one wait.

use super::event::{convert, Event};
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub(crate) struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    pub(crate) fn spawn(sender: Sender<Event>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("linepick-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub(crate) fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the input thread to finish.
    pub(crate) fn join(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<Event>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(raw) => {
                        if let Some(ev) = convert(raw) {
                            if !Self::forward(sender, ev, shutdown, poll_timeout) {
                                break;
                            }
                        }
                    }
                    Err(e) => log::warn!("terminal event read failed: {e}"),
                },
                Ok(false) => {
                    // No event, loop to check shutdown.
                }
                Err(e) => log::warn!("terminal event poll failed: {e}"),
            }
        }
    }

    /// Forward one event without blocking past a shutdown request.
    ///
    /// A full channel (the receiver stopped draining, e.g. the run loop
    /// already exited under a paste flood) must not wedge this thread in
    /// `send`, or `join` would never return and the terminal would stay
    /// in raw mode. Returns `false` when the receiver is gone or
    /// shutdown was requested while the channel stayed full.
    fn forward(
        sender: &Sender<Event>,
        mut ev: Event,
        shutdown: &AtomicBool,
        timeout: Duration,
    ) -> bool {
        loop {
            match sender.send_timeout(ev, timeout) {
                Ok(()) => return true,
                Err(SendTimeoutError::Timeout(back)) => {
                    if shutdown.load(Ordering::Relaxed) {
                        return false;
                    }
                    ev = back;
                }
                Err(SendTimeoutError::Disconnected(_)) => return false,
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::event::Key;
    use crossbeam_channel::bounded;

    #[test]
    fn test_forward_delivers_when_channel_has_room() {
        let (tx, rx) = bounded(1);
        let shutdown = AtomicBool::new(false);
        assert!(InputActor::forward(
            &tx,
            Event::Key(Key::Enter),
            &shutdown,
            Duration::from_millis(1),
        ));
        assert_eq!(rx.recv().unwrap(), Event::Key(Key::Enter));
    }

    #[test]
    fn test_forward_gives_up_on_shutdown_when_channel_is_full() {
        let (tx, rx) = bounded(1);
        tx.send(Event::Key(Key::Enter)).unwrap();
        let shutdown = AtomicBool::new(true);
        // Receiver alive but not draining; the send must not block
        // past the shutdown check.
        assert!(!InputActor::forward(
            &tx,
            Event::Key(Key::Esc),
            &shutdown,
            Duration::from_millis(1),
        ));
        drop(rx);
    }

    #[test]
    fn test_forward_gives_up_when_receiver_is_gone() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let shutdown = AtomicBool::new(false);
        assert!(!InputActor::forward(
            &tx,
            Event::Key(Key::Esc),
            &shutdown,
            Duration::from_millis(1),
        ));
    }
}
