//! Application-wide constants
//!
//! Message keys, the configuration page location and the defaults used by
//! the watchface schema live here so the schema and the relay share one
//! vocabulary.

/// External configuration page
pub mod page {
    /// Location of the rendered settings form (opened without query parameters)
    pub const CONFIG_URL: &str = "http://briwestervelt.github.io/rings_config";
}

/// Payload keys shared by the schema, the renderer and the watch app
pub mod keys {
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const FOREGROUND_COLOR: &str = "foregroundColor";

    pub const COLOR_SETTING: &str = "colorSetting";
    pub const TOP_LINE_SETTING: &str = "topLineSetting";
    pub const BOTTOM_LINE_SETTING: &str = "bottomLineSetting";
    pub const CENTER_LINE_SETTING: &str = "centerLineSetting";

    pub const BLUETOOTH_VIBES: &str = "bluetoothVibes";
    pub const BLUETOOTH_ICON: &str = "bluetoothIcon";
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "rings-config";

    /// Configuration filename
    pub const FILENAME: &str = "config.json";
}

/// Default values declared by the settings schema
pub mod defaults {
    /// Color section
    pub mod color {
        /// Default color mode
        pub const MODE: &str = "dark";

        /// Default background color (RRGGBB)
        pub const BACKGROUND: &str = "0000FF";

        /// Default foreground color (RRGGBB)
        pub const FOREGROUND: &str = "FFFFFF";
    }

    /// Complication lines
    pub mod lines {
        pub const TOP: &str = "weekdayDate";
        pub const BOTTOM: &str = "steps";
        pub const CENTER: &str = "battery";
    }

    /// Bluetooth disconnect behavior
    pub mod bluetooth {
        pub const VIBES: bool = true;
        pub const ICON: bool = true;
    }
}
