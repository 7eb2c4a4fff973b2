//! Prototyper Settings Crate
//!
//! Handles editor configuration: grid, history and logging settings loaded
//! from TOML or JSON files.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, HistorySettings, LoggingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
