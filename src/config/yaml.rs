//! YAML settings loading and saving

use crate::config::Settings;
use crate::config::schema::validate_against_schema;
use crate::error::ClientError;
use crate::system::System;
use crate::utils::fs::create_parent_directories;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load settings from `path`
///
/// A missing or empty file yields default settings.
pub fn load_settings(system: &dyn System, path: &Path) -> Result<Settings> {
    if !system.exists(path) {
        debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    // Parse into a generic value first so unknown keys reach the schema
    let value: Value = serde_yaml::from_str(&content).map_err(|e| {
        ClientError::configuration(format!(
            "Failed to parse YAML settings in file {}: {e}",
            path.display()
        ))
    })?;

    validate_against_schema(&value)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;

    let settings = serde_json::from_value(value).map_err(|e| {
        ClientError::configuration(format!(
            "Failed to read settings from {}: {e}",
            path.display()
        ))
    })?;

    Ok(settings)
}

/// Validate and write settings to `path`, creating parent directories
pub fn save_settings(system: &dyn System, settings: &Settings, path: &Path) -> Result<()> {
    let value =
        serde_json::to_value(settings).context("Failed to convert settings to JSON for validation")?;
    validate_against_schema(&value)?;

    let content = serde_yaml::to_string(settings).context("Failed to serialize settings")?;

    create_parent_directories(system, path)?;
    system.write(path, content.as_bytes()).map_err(|e| {
        ClientError::filesystem(format!(
            "Failed to write settings file {}: {e}",
            path.display()
        ))
    })?;

    debug!("Wrote settings to {}", path.display());
    Ok(())
}
