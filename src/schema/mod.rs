//! Settings schema rendered by the configuration page
//!
//! The schema is an ordered, declarative list of form items. It has no
//! behavior of its own: the page renders it, and the relay only reads it to
//! check submitted selections.

pub mod watchface;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::ConfigurationPayload;

pub use watchface::watchface_schema;

/// One labeled choice of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A form item, serialized in the page's format (`"type": "select"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SchemaItem {
    /// Display-only title
    Heading { default_value: String },
    /// Group of items rendered together
    Section { items: Vec<SchemaItem> },
    /// Single choice among ordered options
    Select {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        message_key: String,
        default_value: String,
        options: Vec<SelectOption>,
    },
    /// Color picker; the flags restrict which colors the page offers
    Color {
        label: String,
        message_key: String,
        default_value: String,
        allow_gray: bool,
        sunlight: bool,
    },
    /// Boolean switch
    Toggle {
        label: String,
        message_key: String,
        default_value: bool,
    },
    /// Display-only formatted text
    Text { default_value: String },
    /// Terminal action; submitting serializes every field into one payload
    Submit { default_value: String },
}

impl SchemaItem {
    /// Payload key of this item, if it carries a value
    pub fn message_key(&self) -> Option<&str> {
        match self {
            SchemaItem::Select { message_key, .. }
            | SchemaItem::Color { message_key, .. }
            | SchemaItem::Toggle { message_key, .. } => Some(message_key),
            _ => None,
        }
    }

    /// Default value in payload form
    fn default_json(&self) -> Option<Value> {
        match self {
            SchemaItem::Select { default_value, .. } | SchemaItem::Color { default_value, .. } => {
                Some(Value::String(default_value.clone()))
            }
            SchemaItem::Toggle { default_value, .. } => Some(Value::Bool(*default_value)),
            _ => None,
        }
    }
}

/// Ordered description of the configuration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    items: Vec<SchemaItem>,
}

impl Schema {
    pub fn new(items: Vec<SchemaItem>) -> Self {
        Self { items }
    }

    #[cfg(test)]
    pub fn items(&self) -> &[SchemaItem] {
        &self.items
    }

    /// Every item in display order, with sections flattened
    pub fn fields(&self) -> Vec<&SchemaItem> {
        fn walk<'a>(items: &'a [SchemaItem], out: &mut Vec<&'a SchemaItem>) {
            for item in items {
                match item {
                    SchemaItem::Section { items } => walk(items, out),
                    other => out.push(other),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Declared payload keys in display order
    pub fn message_keys(&self) -> Vec<&str> {
        self.fields()
            .into_iter()
            .filter_map(SchemaItem::message_key)
            .collect()
    }

    fn field(&self, key: &str) -> Option<&SchemaItem> {
        self.fields()
            .into_iter()
            .find(|item| item.message_key() == Some(key))
    }

    /// Whether a select field lists `value` among its options.
    ///
    /// Returns `None` when `key` is not a select field.
    pub fn allows(&self, key: &str, value: &str) -> Option<bool> {
        match self.field(key)? {
            SchemaItem::Select { options, .. } => Some(options.iter().any(|o| o.value == value)),
            _ => None,
        }
    }

    /// The submission the page produces when nothing is changed
    pub fn defaults(&self) -> Result<ConfigurationPayload> {
        let map: Map<String, Value> = self
            .fields()
            .into_iter()
            .filter_map(|item| Some((item.message_key()?.to_string(), item.default_json()?)))
            .collect();

        serde_json::from_value(Value::Object(map)).context("Schema defaults do not fit the payload")
    }

    /// Pretty JSON in the page's format
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize schema")
    }
}
