//! Infrastructure layer: HTTP transport, settings file, and state persistence.

pub mod http_server;
pub mod settings;
pub mod storage;

pub use http_server::{routes, run_server};
pub use settings::{load_settings, Settings, SettingsError};
