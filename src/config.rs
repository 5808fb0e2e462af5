//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\photo-minder\config.toml
//! - macOS: ~/Library/Application Support/photo-minder/config.toml
//! - Linux: ~/.config/photo-minder/config.toml
//!
//! The config file is human-readable and editable. It holds the extension
//! allow-lists and the tag-copy policy; a missing or unparsable file falls
//! back to defaults so the tool always runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rating-to-label pass settings
    pub rate: RateConfig,

    /// Tag-copy pass settings
    pub copy: CopyConfig,
}

/// Settings for the rating pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Extension allow-list for qualifying image files (case-insensitive)
    pub extensions: Vec<String>,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["jpg".to_string(), "jpeg".to_string(), "arw".to_string()],
        }
    }
}

/// Settings for the tag-copy pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// Extensions identifying preview files (case-insensitive)
    pub jpeg_extensions: Vec<String>,

    /// Sibling candidate extensions, tried in order
    pub raw_extensions: Vec<String>,

    /// Merge with the sibling's existing tags instead of replacing them
    pub merge: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            jpeg_extensions: vec!["jpg".to_string()],
            raw_extensions: vec!["ARW".to_string(), "arw".to_string()],
            merge: false,
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photo-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
