//! Sidebar configuration.
//!
//! Handles loading, validating, and merging `sidebar.toml`. The file is
//! optional and sparse: stock defaults are used for anything it leaves out.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "src/content/docs"  # Directory scanned for content
//! overview_label = "Overview"        # Label for a leaf directory's index page
//! collapse_nested = true             # Collapse groups below the top level
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "sidebar.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Settings for sidebar generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarConfig {
    /// Directory whose subdirectories become the top-level sections.
    pub content_root: String,
    /// Label for the index page of a directory without subdirectories,
    /// used when its front matter declares no title.
    pub overview_label: String,
    /// Collapsed flag for groups below the top level.
    pub collapse_nested: bool,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            content_root: "src/content/docs".to_string(),
            overview_label: "Overview".to_string(),
            collapse_nested: true,
        }
    }
}

impl SidebarConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_root must not be empty".into(),
            ));
        }
        if self.overview_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "overview_label must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SidebarConfig::default()).expect("default config must serialize")
}

/// Overlay the top-level keys of `overlay` onto `base`.
///
/// Every setting is a scalar, so a user key replaces the stock value whole.
/// Keys missing from the overlay keep their stock value; keys missing from
/// the base are carried over so deserialization can reject them.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            base_table.extend(overlay_table);
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// cannot be read or is not valid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SidebarConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SidebarConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`, falling back to stock defaults
/// when it does not exist.
pub fn load_config(path: &Path) -> Result<SidebarConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Load config from a file that must exist, such as one named on the
/// command line.
pub fn load_required_config(path: &Path) -> Result<SidebarConfig, ConfigError> {
    match load_raw_config(path)? {
        Some(overlay) => resolve_config(stock_defaults_value(), Some(overlay)),
        None => Err(ConfigError::NotFound(path.to_path_buf())),
    }
}

/// Returns a fully-commented stock `sidebar.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Sidebar Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.

# Directory scanned for documentation content. Each subdirectory becomes a
# top-level sidebar section; files directly in this directory are not listed.
# The --source flag overrides this.
content_root = "src/content/docs"

# Label for the index page of a directory that has no subdirectories, used
# when the page's front matter declares no title.
overview_label = "Overview"

# Whether groups below the top level start collapsed. Top-level sections
# never carry a collapsed flag.
collapse_nested = true
"##
}
