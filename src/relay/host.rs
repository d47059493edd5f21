//! Host application abstraction layer
//!
//! The relay never talks to a platform directly. It asks the host to show a
//! page and to deliver messages through this trait. Implementations:
//! - stdout (one JSON dictionary per line, browser for the page)
//! - ipc-channel (messages to a connected host process)

use crate::types::AppMessage;

/// Outcome hook invoked once a delivery attempt finishes
pub type SendCallback = Box<dyn FnOnce()>;

/// Primitives the host platform provides to the relay
pub trait Host {
    /// Show `url` to the user. Fire-and-forget: failures stay with the host.
    fn open_external(&self, url: &str);

    /// Attempt to deliver `message` once.
    ///
    /// Exactly one of `on_success` / `on_failure` is invoked when the attempt
    /// completes. Nothing is retried.
    fn send(&self, message: AppMessage, on_success: SendCallback, on_failure: SendCallback);

    /// Human-readable host name for logs
    fn name(&self) -> &'static str;
}
