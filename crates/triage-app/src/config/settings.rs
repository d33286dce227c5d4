//! Settings file handling (.triage/config.toml)

use std::path::Path;

use serde::{Deserialize, Serialize};

use triage_core::prelude::*;
use triage_core::{MasterPolicy, MasterStyle};

/// Directory holding triage configuration, relative to the working directory
pub const TRIAGE_DIR: &str = ".triage";

/// Settings filename inside the triage directory
pub const CONFIG_FILENAME: &str = "config.toml";

/// Root settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dialog: DialogSettings,
}

/// Which master-control variant the dialog runs with.
///
/// The source prototypes disagree on both axes, so neither default is
/// canonical -- they are just the most common variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    /// What activating an already-satisfied master does ("clear" / "flip")
    pub policy: MasterPolicy,
    /// Master control presentation ("checkbox" / "button")
    pub master: MasterStyle,
}

/// Load settings from `<base>/.triage/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(base: &Path) -> Settings {
    let config_path = base.join(TRIAGE_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write settings to `<base>/.triage/config.toml`, creating the directory
/// if needed.
pub fn save_settings(base: &Path, settings: &Settings) -> Result<()> {
    let dir = base.join(TRIAGE_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {TRIAGE_DIR} dir: {e}")))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {e}")))?;
    std::fs::write(dir.join(CONFIG_FILENAME), content)
        .map_err(|e| Error::config(format!("Failed to write config: {e}")))?;
    Ok(())
}
