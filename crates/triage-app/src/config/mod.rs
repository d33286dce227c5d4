//! Configuration file parsing for triage
//!
//! Supports `.triage/config.toml` in the working directory for the
//! master-control variant defaults. CLI flags override file settings.

pub mod settings;

pub use settings::{load_settings, save_settings, DialogSettings, Settings, CONFIG_FILENAME, TRIAGE_DIR};
