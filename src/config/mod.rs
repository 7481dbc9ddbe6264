// SPDX-License-Identifier: MPL-2.0
//! This module handles the registry configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[timing]` - Notification lifetime, entry delay and exit grace
//! - `[diagnostics]` - Lifecycle journal size
//!
//! # Location
//!
//! `load_from_path`/`save_to_path` take an explicit file. Everything else
//! resolves the directory through [`config_dir_with_override`], which honors
//! `TOAST_REGISTRY_CONFIG_DIR`.
//!
//! # Examples
//!
//! ```no_run
//! use toast_registry::config;
//!
//! let (mut settings, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! settings.timing.lifetime_ms = Some(5_000);
//! config::save(&settings).expect("settings should be writable");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::JournalCapacity;
use crate::domain::notification::{AnimationDelay, Lifetime};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastRegistry";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_REGISTRY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    #[serde(default = "default_lifetime_ms", skip_serializing_if = "Option::is_none")]
    pub lifetime_ms: Option<u64>,

    #[serde(
        default = "default_entry_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_delay_ms: Option<u64>,

    #[serde(
        default = "default_exit_grace_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_grace_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_lifetime_ms(),
            entry_delay_ms: default_entry_delay_ms(),
            exit_grace_ms: default_exit_grace_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(
        default = "default_journal_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            journal_capacity: default_journal_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Global notification lifetime, clamped to the valid range.
    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        Lifetime::from_millis(self.timing.lifetime_ms.unwrap_or(DEFAULT_LIFETIME_MS))
    }

    /// Wait before a new notification becomes visible.
    #[must_use]
    pub fn entry_delay(&self) -> AnimationDelay {
        AnimationDelay::from_millis(
            self.timing
                .entry_delay_ms
                .unwrap_or(DEFAULT_ENTRY_DELAY_MS),
        )
    }

    /// Wait between hiding a notification and deleting it.
    #[must_use]
    pub fn exit_grace(&self) -> AnimationDelay {
        AnimationDelay::from_millis(self.timing.exit_grace_ms.unwrap_or(DEFAULT_EXIT_GRACE_MS))
    }

    /// Lifecycle journal capacity.
    #[must_use]
    pub fn journal_capacity(&self) -> JournalCapacity {
        JournalCapacity::new(
            self.diagnostics
                .journal_capacity
                .unwrap_or(DEFAULT_JOURNAL_CAPACITY),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_lifetime_ms() -> Option<u64> {
    Some(DEFAULT_LIFETIME_MS)
}

fn default_entry_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTRY_DELAY_MS)
}

fn default_exit_grace_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_GRACE_MS)
}

fn default_journal_capacity() -> Option<usize> {
    Some(DEFAULT_JOURNAL_CAPACITY)
}

// =============================================================================
// File Location
// =============================================================================

/// Directory holding `settings.toml`.
///
/// An explicit `base_dir` wins, then `TOAST_REGISTRY_CONFIG_DIR` when set
/// and non-empty, then `ToastRegistry/` under the platform config directory.
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads `settings.toml` from the resolved config directory.
///
/// Never fails: a missing file yields the defaults silently, an unreadable
/// or malformed one yields the defaults plus a warning for the caller to
/// surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Same as [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(base_dir) else {
        return (Config::default(), None);
    };

    match load_from_path(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded registry settings");
            (config, None)
        }
        Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            (Config::default(), None)
        }
        Err(err) => (
            Config::default(),
            Some(format!("cannot use {}: {err}", path.display())),
        ),
    }
}

/// Parses the file at `path`.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::ConfigParse`] when
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Writes `settings.toml` into the resolved config directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Same as [`save`], writing into `base_dir` when given.
///
/// Does nothing when no config directory can be resolved.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match settings_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Serializes `config` to `path`, creating parent directories.
///
/// # Errors
///
/// [`Error::Io`] on filesystem failure, [`Error::ConfigSerialize`] if the
/// value cannot be expressed as TOML.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            timing: TimingConfig {
                lifetime_ms: Some(4_500),
                entry_delay_ms: Some(20),
                exit_grace_ms: Some(250),
            },
            diagnostics: DiagnosticsConfig {
                journal_capacity: Some(64),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\nlifetime_ms =")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config: Config = toml::from_str("[timing]\nlifetime_ms = 1200\n")
            .expect("partial config should parse");

        assert_eq!(config.timing.lifetime_ms, Some(1_200));
        assert_eq!(config.timing.exit_grace_ms, Some(DEFAULT_EXIT_GRACE_MS));
        assert_eq!(
            config.diagnostics.journal_capacity,
            Some(DEFAULT_JOURNAL_CAPACITY)
        );
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            timing: TimingConfig {
                lifetime_ms: Some(1),
                entry_delay_ms: Some(u64::MAX),
                exit_grace_ms: None,
            },
            diagnostics: DiagnosticsConfig {
                journal_capacity: Some(0),
            },
        };

        assert_eq!(config.lifetime().as_millis(), MIN_LIFETIME_MS);
        assert_eq!(config.entry_delay().as_millis(), MAX_ANIMATION_DELAY_MS);
        assert_eq!(
            config.exit_grace().as_duration(),
            Duration::from_millis(DEFAULT_EXIT_GRACE_MS)
        );
        assert_eq!(config.journal_capacity().value(), MIN_JOURNAL_CAPACITY);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("cfg");

        save_with_override(&Config::default(), Some(base.clone())).expect("save should work");
        assert!(base.join(CONFIG_FILE).exists());
    }
}
