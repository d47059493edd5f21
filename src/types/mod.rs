//! Data exchanged between the configuration page, the relay and the watch app

pub mod message;
pub mod payload;

pub use message::AppMessage;
pub use payload::ConfigurationPayload;
