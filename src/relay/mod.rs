//! Settings relay
//!
//! Bridges the configuration page and the watch app: opens the page on
//! request and forwards returned settings through a [`Host`].

pub mod handler;
pub mod host;
pub mod ipc_host;
pub mod stdout_host;

pub use handler::{ConfigurationRelay, RelayOutcome};
pub use host::Host;
pub use ipc_host::IpcHost;
pub use stdout_host::StdoutHost;
