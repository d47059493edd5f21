use serde::{Deserialize, Serialize};

use crate::types::AppMessage;

/// Messages sent from the relay to the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostMessage {
    /// Ask the host to show the configuration page
    OpenUrl(String),
    /// Settings to deliver to the watch app
    AppMessage(AppMessage),
}
