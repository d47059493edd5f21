//! Lifecycle handlers of the settings relay

use std::borrow::Cow;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::host::Host;
use crate::constants::page::CONFIG_URL;
use crate::schema::Schema;
use crate::types::{AppMessage, ConfigurationPayload};

/// Percent-encoded text that cannot be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed escape at byte {0}")]
    Escape(usize),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Returned configuration that could not be read
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("configuration response is not valid percent-encoded text: {0}")]
    Decode(#[from] DecodeError),
    #[error("configuration response is not a valid settings object: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What happened to a returned configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// One message was handed to the host
    Forwarded,
    /// Neither color was submitted, nothing was sent
    Suppressed,
}

/// Relays settings from the configuration page to the watch app.
///
/// Stateless between events: each handler reads only its arguments and the
/// immutable schema.
pub struct ConfigurationRelay<'a, H: Host> {
    host: H,
    schema: &'a Schema,
}

impl<'a, H: Host> ConfigurationRelay<'a, H> {
    pub fn new(host: H, schema: &'a Schema) -> Self {
        Self { host, schema }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Host finished loading; nothing to initialize yet
    pub fn on_ready(&self) {
        debug!(host = self.host.name(), "Relay ready");
    }

    /// User asked to configure the watchface: open the page, no parameters
    pub fn on_configuration_requested(&self) {
        info!(url = CONFIG_URL, "Opening the configuration page");
        self.host.open_external(CONFIG_URL);
    }

    /// The page closed with a response.
    ///
    /// `raw` is percent-encoded JSON. Unreadable input is returned as an error
    /// without sending anything. A submission without either color is
    /// dropped, even when other settings changed.
    pub fn on_configuration_returned(&self, raw: &str) -> Result<RelayOutcome, RelayError> {
        let decoded = decode_component(raw).map_err(RelayError::Decode)?;
        let payload = ConfigurationPayload::from_json(&decoded)?;
        debug!(payload = ?payload, "Configuration returned");

        if !payload.has_color() {
            debug!("No color in the returned configuration, nothing forwarded");
            return Ok(RelayOutcome::Suppressed);
        }

        self.check_selections(&payload);

        let message = AppMessage::from_payload(&payload);
        self.host.send(
            message,
            Box::new(on_send_success),
            Box::new(on_send_failure),
        );
        Ok(RelayOutcome::Forwarded)
    }

    /// Warn about selections the schema does not list; they are still sent
    fn check_selections(&self, payload: &ConfigurationPayload) {
        use crate::constants::keys;

        let selections = [
            (keys::COLOR_SETTING, &payload.color_setting),
            (keys::TOP_LINE_SETTING, &payload.top_line_setting),
            (keys::BOTTOM_LINE_SETTING, &payload.bottom_line_setting),
            (keys::CENTER_LINE_SETTING, &payload.center_line_setting),
        ];

        for (key, value) in selections {
            let Some(value) = value else { continue };
            if self.schema.allows(key, value) == Some(false) {
                warn!(key = key, value = %value, "Selection is not a schema option");
            }
        }
    }
}

/// Percent-decode like `decodeURIComponent`: every `%` must start a
/// two-digit hex escape, `+` stays `+`, and the bytes must be UTF-8
fn decode_component(raw: &str) -> Result<Cow<'_, str>, DecodeError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|e| e.iter().all(u8::is_ascii_hexdigit)) {
                return Err(DecodeError::Escape(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(urlencoding::decode(raw)?)
}

fn on_send_success() {
    debug!("Settings delivered to the watch app");
}

fn on_send_failure() {
    debug!("Settings delivery failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::host::SendCallback;
    use crate::schema::watchface_schema;
    use serde_json::{Value, json};
    use std::cell::{Cell, RefCell};

    /// Records every call; delivery succeeds unless `fail` is set
    #[derive(Default)]
    struct RecordingHost {
        opened: RefCell<Vec<String>>,
        sent: RefCell<Vec<AppMessage>>,
        fail: bool,
        successes: Cell<usize>,
        failures: Cell<usize>,
    }

    impl Host for &RecordingHost {
        fn open_external(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }

        fn send(&self, message: AppMessage, on_success: SendCallback, on_failure: SendCallback) {
            self.sent.borrow_mut().push(message);
            if self.fail {
                self.failures.set(self.failures.get() + 1);
                on_failure();
            } else {
                self.successes.set(self.successes.get() + 1);
                on_success();
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn relay(host: &RecordingHost) -> ConfigurationRelay<'static, &RecordingHost> {
        ConfigurationRelay::new(host, watchface_schema())
    }

    fn encode(value: Value) -> String {
        urlencoding::encode(&value.to_string()).into_owned()
    }

    #[test]
    fn test_ready_does_nothing() {
        let host = RecordingHost::default();
        relay(&host).on_ready();

        assert!(host.opened.borrow().is_empty());
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_configuration_requested_opens_fixed_url() {
        let host = RecordingHost::default();
        relay(&host).on_configuration_requested();

        assert_eq!(
            *host.opened.borrow(),
            vec!["http://briwestervelt.github.io/rings_config".to_string()]
        );
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_colors_and_flags_forwarded() {
        let host = RecordingHost::default();
        let raw = encode(json!({
            "backgroundColor": "FF0000",
            "foregroundColor": "00FF00",
            "bluetoothVibes": true
        }));

        let outcome = relay(&host).on_configuration_returned(&raw).unwrap();
        assert_eq!(outcome, RelayOutcome::Forwarded);

        let sent = host.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            Value::Object(sent[0].to_dictionary()),
            json!({
                "backgroundColor": 16711680,
                "foregroundColor": 65280,
                "bluetoothVibes": true
            })
        );
        assert_eq!(sent[0].battery_line, None);
        assert_eq!(sent[0].static_line, None);
        assert_eq!(sent[0].no_line, None);
        assert_eq!(sent[0].show_date, None);
        assert_eq!(host.successes.get(), 1);
    }

    #[test]
    fn test_single_color_is_enough() {
        for key in ["backgroundColor", "foregroundColor"] {
            let host = RecordingHost::default();
            let raw = encode(json!({ key: "0000FF", "topLineSetting": "steps" }));

            assert_eq!(
                relay(&host).on_configuration_returned(&raw).unwrap(),
                RelayOutcome::Forwarded
            );

            let sent = host.sent.borrow();
            assert_eq!(sent.len(), 1);
            let dictionary = sent[0].to_dictionary();
            assert_eq!(dictionary.get(key), Some(&json!(255)));
            assert_eq!(dictionary.get("topLineSetting"), Some(&json!("steps")));
        }
    }

    #[test]
    fn test_no_color_suppresses_forward() {
        let host = RecordingHost::default();
        let raw = encode(json!({ "bluetoothVibes": false }));

        assert_eq!(
            relay(&host).on_configuration_returned(&raw).unwrap(),
            RelayOutcome::Suppressed
        );
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_no_color_suppresses_even_with_every_other_field() {
        let host = RecordingHost::default();
        let raw = encode(json!({
            "colorSetting": "hot",
            "topLineSetting": "month",
            "bottomLineSetting": "feet",
            "centerLineSetting": "none",
            "bluetoothVibes": true,
            "bluetoothIcon": false,
            "batteryLine": true,
            "staticLine": false,
            "noLine": false,
            "showDate": true,
            "backgroundColor": ""
        }));

        assert_eq!(
            relay(&host).on_configuration_returned(&raw).unwrap(),
            RelayOutcome::Suppressed
        );
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let host = RecordingHost::default();
        let raw = urlencoding::encode("{not json").into_owned();

        let err = relay(&host).on_configuration_returned(&raw).unwrap_err();
        assert!(matches!(err, RelayError::Parse(_)));
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let host = RecordingHost::default();

        let err = relay(&host).on_configuration_returned("%FF%FE").unwrap_err();
        assert!(matches!(err, RelayError::Decode(DecodeError::Utf8(_))));
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_malformed_escape_is_a_decode_error() {
        let host = RecordingHost::default();
        // Valid JSON once the bad escape is copied through
        let raw = "%7B%22backgroundColor%22%3A%22FF0000%22%2C%22colorSetting%22%3A%22a%ZZ%22%7D";

        let err = relay(&host).on_configuration_returned(raw).unwrap_err();
        assert!(matches!(err, RelayError::Decode(DecodeError::Escape(67))));
        assert!(host.sent.borrow().is_empty());
    }

    #[test]
    fn test_truncated_escape_is_a_decode_error() {
        for raw in ["%7B%7D%", "%7B%7D%4"] {
            let host = RecordingHost::default();

            let err = relay(&host).on_configuration_returned(raw).unwrap_err();
            assert!(matches!(err, RelayError::Decode(DecodeError::Escape(6))));
            assert!(host.sent.borrow().is_empty());
        }
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("%7B%22a%22%3A1%7D").unwrap(), r#"{"a":1}"#);
        assert_eq!(decode_component("a+b%20c").unwrap(), "a+b c");
        assert_eq!(decode_component("%e2%9c%93").unwrap(), "\u{2713}");
        assert!(matches!(decode_component("%G0"), Err(DecodeError::Escape(0))));
    }

    #[test]
    fn test_plus_is_not_a_space() {
        let host = RecordingHost::default();
        // Already-decoded JSON passes through untouched
        let raw = r#"{"backgroundColor":"FF0000","colorSetting":"a+b"}"#;

        relay(&host).on_configuration_returned(raw).unwrap();
        assert_eq!(host.sent.borrow()[0].color_setting.as_deref(), Some("a+b"));
    }

    #[test]
    fn test_unknown_selection_still_forwarded() {
        let host = RecordingHost::default();
        let raw = encode(json!({
            "foregroundColor": "FFFFFF",
            "centerLineSetting": "sideways"
        }));

        relay(&host).on_configuration_returned(&raw).unwrap();
        assert_eq!(
            host.sent.borrow()[0].center_line_setting.as_deref(),
            Some("sideways")
        );
    }

    #[test]
    fn test_delivery_failure_is_swallowed() {
        let host = RecordingHost {
            fail: true,
            ..Default::default()
        };
        let raw = encode(json!({ "backgroundColor": "FF0000" }));

        assert_eq!(
            relay(&host).on_configuration_returned(&raw).unwrap(),
            RelayOutcome::Forwarded
        );
        assert_eq!(host.sent.borrow().len(), 1);
        assert_eq!(host.failures.get(), 1);
        assert_eq!(host.successes.get(), 0);
    }

    #[test]
    fn test_schema_defaults_relay_cleanly() {
        let host = RecordingHost::default();
        let raw = watchface_schema().defaults().unwrap().encode().unwrap();

        relay(&host).on_configuration_returned(&raw).unwrap();

        let sent = host.sent.borrow();
        assert_eq!(sent[0].background_color, Some(0x0000FF));
        assert_eq!(sent[0].foreground_color, Some(0xFFFFFF));
        assert_eq!(sent[0].color_setting.as_deref(), Some("dark"));
        assert_eq!(sent[0].bluetooth_icon, Some(true));
    }
}
