//! Configuration management
//!
//! Handles the relay's own settings with JSON persistence.

pub mod app;

pub use app::AppConfig;
