//! Host reached over ipc-channel
//!
//! The host process creates an `IpcOneShotServer<IpcSender<HostMessage>>`
//! and passes its name to the relay; the relay connects, hands over a
//! sender, and from then on every page request and settings message is a
//! `HostMessage` on that channel.

use anyhow::{Context, Result};
use ipc_channel::ipc::{self, IpcReceiver, IpcSender};
use tracing::{debug, error, info};

use super::host::{Host, SendCallback};
use crate::common::ipc::HostMessage;
use crate::types::AppMessage;

pub struct IpcHost {
    tx: IpcSender<HostMessage>,
}

impl IpcHost {
    pub fn new(tx: IpcSender<HostMessage>) -> Self {
        Self { tx }
    }

    /// Connect to the one-shot server named `server_name`
    pub fn connect(server_name: String) -> Result<Self> {
        info!(server = %server_name, "Connecting to IPC server");
        let bootstrap: IpcSender<IpcReceiver<HostMessage>> =
            IpcSender::connect(server_name).context("Failed to connect to IPC server")?;

        let (tx, rx) = ipc::channel::<HostMessage>().context("Failed to create IPC channel")?;
        bootstrap
            .send(rx)
            .context("Failed to send bootstrap message")?;

        Ok(Self::new(tx))
    }
}

impl Host for IpcHost {
    fn open_external(&self, url: &str) {
        if let Err(e) = self.tx.send(HostMessage::OpenUrl(url.to_string())) {
            error!(url = %url, error = %e, "Failed to ask host to open URL");
        }
    }

    fn send(&self, message: AppMessage, on_success: SendCallback, on_failure: SendCallback) {
        match self.tx.send(HostMessage::AppMessage(message)) {
            Ok(()) => on_success(),
            Err(e) => {
                debug!(error = %e, "IPC send failed");
                on_failure();
            }
        }
    }

    fn name(&self) -> &'static str {
        "ipc"
    }
}
