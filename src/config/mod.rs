//! Settings management module
//!
//! Handles YAML settings parsing, JSON schema validation, and the default
//! settings location

pub mod schema;
pub mod yaml;

use crate::error::ClientError;
use crate::system::System;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the platform config dir holding the settings file
pub const CONFIG_DIR_NAME: &str = "kaggle-client";

/// Settings file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Persisted client settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Kaggle account name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Kaggle API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Competition used when a command is given none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,

    /// The `kaggle` executable to run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<String>,
}

impl Settings {
    /// Load settings from file
    pub fn load_from_file(system: &dyn System, path: &Path) -> Result<Self> {
        yaml::load_settings(system, path)
    }

    /// Write settings to file
    pub fn save_to_file(&self, system: &dyn System, path: &Path) -> Result<()> {
        yaml::save_settings(system, self, path)
    }

    /// Render the settings for display, with the key masked
    #[must_use]
    pub fn describe(&self) -> String {
        let show = |value: Option<&String>| value.map_or("(not set)", String::as_str).to_owned();

        [
            format!("username: {}", show(self.username.as_ref())),
            format!(
                "key: {}",
                if self.key.is_some() { "********" } else { "(not set)" }
            ),
            format!("competition: {}", show(self.competition.as_ref())),
            format!("cli: {}", show(self.cli.as_ref())),
        ]
        .join("\n")
    }
}

/// Platform default location of the settings file
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        ClientError::configuration(
            "Could not determine the user configuration directory; pass --config",
        )
    })?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
