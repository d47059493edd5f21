//! Host that writes messages as JSON lines
//!
//! Used when the relay runs standalone: each forwarded message becomes one
//! line on the writer (stdout in the CLI) and the configuration page is
//! opened in the default browser, or printed when print-only is set.

use std::cell::RefCell;
use std::io::Write;

use tracing::{error, info};

use super::host::{Host, SendCallback};
use crate::types::AppMessage;

pub struct StdoutHost<W: Write> {
    out: RefCell<W>,
    print_only: bool,
}

impl<W: Write> StdoutHost<W> {
    pub fn new(out: W, print_only: bool) -> Self {
        Self {
            out: RefCell::new(out),
            print_only,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

impl<W: Write> Host for StdoutHost<W> {
    fn open_external(&self, url: &str) {
        if self.print_only {
            if let Err(e) = self.write_line(url) {
                error!(error = %e, "Failed to print configuration URL");
            }
            return;
        }

        match webbrowser::open(url) {
            Ok(()) => info!(url = %url, "Opened configuration page in browser"),
            Err(e) => error!(url = %url, error = %e, "Failed to open browser"),
        }
    }

    fn send(&self, message: AppMessage, on_success: SendCallback, on_failure: SendCallback) {
        let line = match serde_json::to_string(&message.to_dictionary()) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, "Failed to serialize message");
                on_failure();
                return;
            }
        };

        match self.write_line(&line) {
            Ok(()) => on_success(),
            Err(e) => {
                error!(error = %e, "Failed to write message");
                on_failure();
            }
        }
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}
