//! Configuration file loading with precedence handling.
//!
//! Resolution order, later sources winning:
//! defaults → config file → environment variables → CLI flags.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an explicitly requested config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/rewind/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Per-panel display duration in milliseconds.
    #[serde(default)]
    pub auto_advance_ms: Option<u64>,

    /// Horizontal drag threshold in terminal columns.
    #[serde(default)]
    pub drag_threshold: Option<u16>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Per-panel display duration in milliseconds.
    pub auto_advance_ms: u64,
    /// Horizontal drag threshold in terminal columns.
    pub drag_threshold: u16,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// Per-panel display duration as a [`Duration`].
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: 5000,
            drag_threshold: 6,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log location: `~/.local/share/rewind/rewind.log` (or the temp
/// dir when no data directory is available).
fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rewind")
        .join("rewind.log")
}

/// Default config location: `~/.config/rewind/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rewind").join("config.toml"))
}

/// Load the config file, if any.
///
/// An explicit `--config` path must exist and parse; a missing file at the
/// default location is not an error and yields `None`.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => read_config(&path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path).map(Some),
            _ => Ok(None),
        },
    }
}

fn read_config(path: &PathBuf) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })
}

/// Merge an optional config file over the hardcoded defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    if let Some(file) = file {
        if let Some(ms) = file.auto_advance_ms {
            resolved.auto_advance_ms = ms;
        }
        if let Some(threshold) = file.drag_threshold {
            resolved.drag_threshold = threshold;
        }
        if let Some(path) = file.log_file_path {
            resolved.log_file_path = path;
        }
    }
    resolved
}

/// Apply `REWIND_*` environment variable overrides.
///
/// Unparseable values are ignored rather than fatal; a typo in the
/// environment should not stop a story from playing.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("REWIND_AUTO_ADVANCE_MS") {
        if let Ok(ms) = value.parse() {
            config.auto_advance_ms = ms;
        }
    }
    if let Ok(value) = std::env::var("REWIND_DRAG_THRESHOLD") {
        if let Ok(threshold) = value.parse() {
            config.drag_threshold = threshold;
        }
    }
    if let Ok(value) = std::env::var("REWIND_LOG_FILE") {
        if !value.is_empty() {
            config.log_file_path = PathBuf::from(value);
        }
    }
    config
}

/// Apply CLI flag overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    duration_ms: Option<u64>,
    drag_threshold: Option<u16>,
) -> ResolvedConfig {
    if let Some(ms) = duration_ms {
        config.auto_advance_ms = ms;
    }
    if let Some(threshold) = drag_threshold {
        config.drag_threshold = threshold;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = ResolvedConfig::default();
        assert_eq!(config.auto_advance_ms, 5000);
        assert_eq!(config.drag_threshold, 6);
        assert_eq!(config.auto_advance(), Duration::from_millis(5000));
    }

    #[test]
    fn merge_with_no_file_keeps_defaults() {
        assert_eq!(merge_config(None), ResolvedConfig::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let file = ConfigFile {
            auto_advance_ms: Some(3000),
            drag_threshold: None,
            log_file_path: Some(PathBuf::from("/tmp/story.log")),
        };
        let resolved = merge_config(Some(file));
        assert_eq!(resolved.auto_advance_ms, 3000);
        assert_eq!(resolved.drag_threshold, 6, "unset field keeps its default");
        assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/story.log"));
    }

    #[test]
    fn cli_overrides_beat_everything() {
        let file = ConfigFile {
            auto_advance_ms: Some(3000),
            drag_threshold: Some(10),
            log_file_path: None,
        };
        let resolved = apply_cli_overrides(merge_config(Some(file)), Some(7000), None);
        assert_eq!(resolved.auto_advance_ms, 7000);
        assert_eq!(resolved.drag_threshold, 10, "untouched flag keeps file value");
    }

    #[test]
    #[serial(rewind_env)]
    fn env_overrides_beat_file_values() {
        std::env::set_var("REWIND_AUTO_ADVANCE_MS", "2500");
        let file = ConfigFile {
            auto_advance_ms: Some(3000),
            drag_threshold: None,
            log_file_path: None,
        };
        let resolved = apply_env_overrides(merge_config(Some(file)));
        std::env::remove_var("REWIND_AUTO_ADVANCE_MS");

        assert_eq!(resolved.auto_advance_ms, 2500);
    }

    #[test]
    #[serial(rewind_env)]
    fn unparseable_env_value_is_ignored() {
        std::env::set_var("REWIND_AUTO_ADVANCE_MS", "eleven");
        let resolved = apply_env_overrides(ResolvedConfig::default());
        std::env::remove_var("REWIND_AUTO_ADVANCE_MS");

        assert_eq!(resolved.auto_advance_ms, 5000);
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        let err =
            load_config_with_precedence(Some(PathBuf::from("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn explicit_config_file_is_parsed() {
        let path = std::env::temp_dir().join("rewind_config_test.toml");
        std::fs::write(&path, "auto_advance_ms = 1234\ndrag_threshold = 9\n").unwrap();

        let file = load_config_with_precedence(Some(path.clone()))
            .unwrap()
            .unwrap();
        assert_eq!(file.auto_advance_ms, Some(1234));
        assert_eq!(file.drag_threshold, Some(9));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let path = std::env::temp_dir().join("rewind_config_unknown.toml");
        std::fs::write(&path, "autoplay = true\n").unwrap();

        let err = load_config_with_precedence(Some(path.clone())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));

        let _ = std::fs::remove_file(path);
    }
}
