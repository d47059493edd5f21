//! Settings submitted by the configuration page

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One submission of the configuration form.
///
/// Every key is optional: the page only reports what it rendered, and older
/// page versions send the legacy line/date flags instead of the selects.
/// Unknown keys are ignored and JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_line_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_line_setting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_line_setting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bluetooth_vibes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bluetooth_icon: Option<bool>,

    // Legacy fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_date: Option<bool>,
}

impl ConfigurationPayload {
    /// Whether either color was submitted.
    ///
    /// An empty string counts as not submitted, like a cleared color input.
    pub fn has_color(&self) -> bool {
        let present = |c: &Option<String>| c.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.background_color) || present(&self.foreground_color)
    }

    /// Parse the decoded JSON text of a submission
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode the way the configuration page returns it: JSON, then
    /// percent-encoded
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to serialize configuration")?;
        Ok(urlencoding::encode(&json).into_owned())
    }
}
