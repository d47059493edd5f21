//! The watchface's configuration form

use std::sync::LazyLock;

use super::{Schema, SchemaItem, SelectOption};
use crate::constants::{defaults, keys};

static WATCHFACE_SCHEMA: LazyLock<Schema> = LazyLock::new(build);

/// The form shown by the configuration page, built once
pub fn watchface_schema() -> &'static Schema {
    &WATCHFACE_SCHEMA
}

fn heading(text: &str) -> SchemaItem {
    SchemaItem::Heading {
        default_value: text.to_string(),
    }
}

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

fn select(label: Option<&str>, key: &str, default: &str, choices: &[(&str, &str)]) -> SchemaItem {
    SchemaItem::Select {
        label: label.map(str::to_string),
        message_key: key.to_string(),
        default_value: default.to_string(),
        options: options(choices),
    }
}

fn color(label: &str, key: &str, default: &str) -> SchemaItem {
    SchemaItem::Color {
        label: label.to_string(),
        message_key: key.to_string(),
        default_value: default.to_string(),
        allow_gray: true,
        sunlight: false,
    }
}

fn toggle(label: &str, key: &str, default: bool) -> SchemaItem {
    SchemaItem::Toggle {
        label: label.to_string(),
        message_key: key.to_string(),
        default_value: default,
    }
}

const COLOR_MODES: &[(&str, &str)] = &[
    ("Selected Colors (below)", "selectedColors"),
    ("True Random (may have poor contrast/readability)", "trueRandom"),
    ("Random Dark Colors", "dark"),
    ("Random Light Colors", "light"),
    ("Random Hot Colors", "hot"),
    ("Random Cold Colors", "cold"),
];

/// Shared by the top and bottom lines
const COMPLICATIONS: &[(&str, &str)] = &[
    ("Digital Time", "digitalTime"),
    ("Month", "month"),
    ("Day of Month", "date"),
    ("Weekday", "weekday"),
    ("Month/Day", "monthDay"),
    ("Day/Month", "dayMonth"),
    ("Weekday, Date", "weekdayDate"),
    ("Steps Today", "steps"),
    ("Distance Walked Today (meters)", "meters"),
    ("Distance Walked Today (feet)", "feet"),
    ("Calories Burned Today", "calories"),
];

const CENTER_LINE_MODES: &[(&str, &str)] = &[
    ("Center Line Indicates Battery Level", "battery"),
    ("Center Line is Constant Length", "constant"),
    ("No Center Line", "none"),
];

fn build() -> Schema {
    Schema::new(vec![
        heading("Theta Configuration"),
        SchemaItem::Section {
            items: vec![
                heading("Color Options"),
                select(
                    Some("Color Mode"),
                    keys::COLOR_SETTING,
                    defaults::color::MODE,
                    COLOR_MODES,
                ),
                color(
                    "Background Color",
                    keys::BACKGROUND_COLOR,
                    defaults::color::BACKGROUND,
                ),
                color(
                    "Foreground Color",
                    keys::FOREGROUND_COLOR,
                    defaults::color::FOREGROUND,
                ),
                SchemaItem::Text {
                    default_value: "<font size=3>Random colors change every hour on the hour and when you reload the face</font>".to_string(),
                },
            ],
        },
        SchemaItem::Section {
            items: vec![
                heading("Complications"),
                select(
                    Some("Top Line"),
                    keys::TOP_LINE_SETTING,
                    defaults::lines::TOP,
                    COMPLICATIONS,
                ),
                select(
                    Some("Bottom Line"),
                    keys::BOTTOM_LINE_SETTING,
                    defaults::lines::BOTTOM,
                    COMPLICATIONS,
                ),
            ],
        },
        SchemaItem::Section {
            items: vec![
                heading("Center Line"),
                select(
                    None,
                    keys::CENTER_LINE_SETTING,
                    defaults::lines::CENTER,
                    CENTER_LINE_MODES,
                ),
            ],
        },
        SchemaItem::Section {
            items: vec![
                heading("Bluetooth"),
                toggle(
                    "Vibrate on bluetooth disconnect",
                    keys::BLUETOOTH_VIBES,
                    defaults::bluetooth::VIBES,
                ),
                toggle(
                    "Show icon on bluetooth disconnect",
                    keys::BLUETOOTH_ICON,
                    defaults::bluetooth::ICON,
                ),
            ],
        },
        SchemaItem::Submit {
            default_value: "Save".to_string(),
        },
    ])
}
