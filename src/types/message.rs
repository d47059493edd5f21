//! Message forwarded to the watch app

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::common::color::HexColor;
use crate::constants::keys;
use crate::types::ConfigurationPayload;

/// Settings dictionary handed to the host's message-send primitive.
///
/// Colors are converted to their integer value; every other field is copied
/// unchanged. Serialized with plain serde (no skipped fields) so it travels
/// over `ipc-channel`; use [`AppMessage::to_dictionary`] for the keyed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMessage {
    pub background_color: Option<u32>,
    pub foreground_color: Option<u32>,
    pub color_setting: Option<String>,
    pub top_line_setting: Option<String>,
    pub bottom_line_setting: Option<String>,
    pub center_line_setting: Option<String>,
    pub bluetooth_vibes: Option<bool>,
    pub bluetooth_icon: Option<bool>,
    pub battery_line: Option<bool>,
    pub static_line: Option<bool>,
    pub no_line: Option<bool>,
    pub show_date: Option<bool>,
}

impl AppMessage {
    /// Build the outgoing message from a submission
    pub fn from_payload(payload: &ConfigurationPayload) -> Self {
        Self {
            background_color: convert_color(keys::BACKGROUND_COLOR, payload.background_color.as_deref()),
            foreground_color: convert_color(keys::FOREGROUND_COLOR, payload.foreground_color.as_deref()),
            color_setting: payload.color_setting.clone(),
            top_line_setting: payload.top_line_setting.clone(),
            bottom_line_setting: payload.bottom_line_setting.clone(),
            center_line_setting: payload.center_line_setting.clone(),
            bluetooth_vibes: payload.bluetooth_vibes,
            bluetooth_icon: payload.bluetooth_icon,
            battery_line: payload.battery_line,
            static_line: payload.static_line,
            no_line: payload.no_line,
            show_date: payload.show_date,
        }
    }

    /// Key/value form with absent fields left out
    pub fn to_dictionary(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            // A struct of plain options always serializes to an object
            _ => Map::new(),
        }
    }
}

fn convert_color(key: &str, hex: Option<&str>) -> Option<u32> {
    let hex = hex.filter(|s| !s.is_empty())?;
    match HexColor::parse(hex) {
        Some(color) => Some(color.value()),
        None => {
            warn!(key = key, value = %hex, "Invalid hex color, leaving it out of the message");
            None
        }
    }
}
