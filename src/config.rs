//! Configuration management for paylog

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Logger configuration
///
/// All fields are fixed once a [`FileLogger`](crate::FileLogger) is built
/// from them; only the directory and file paths are derived afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Directory the log files live in. May be relative, in which case it
    /// is resolved by the logger's root-resolution function.
    pub path: PathBuf,

    /// Minimum severity to persist: one of
    /// `emergency|alert|critical|error|warning|notice|info|debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Literal file-name prefix, e.g. `gateway_`
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Literal file-name suffix without the leading dot, e.g. `log`
    #[serde(default = "default_extension")]
    pub extension: String,

    /// chrono strftime format for the in-line timestamp
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Maximum number of daily log files kept before the oldest are deleted
    #[serde(default = "default_backup_file_rotation")]
    pub backup_file_rotation: usize,
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_prefix() -> String {
    "log_".to_string()
}

fn default_extension() -> String {
    "log".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_backup_file_rotation() -> usize {
    30
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: default_logs_dir(),
            level: default_level(),
            prefix: default_prefix(),
            extension: default_extension(),
            date_format: default_date_format(),
            backup_file_rotation: default_backup_file_rotation(),
        }
    }
}

impl LoggerConfig {
    /// Load configuration from a TOML file, or return the default if the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("failed to parse config file: {e}")))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Get the default logs directory (~/.paylog/logs)
/// Falls back to ./.paylog/logs if the home directory cannot be determined
pub fn default_logs_dir() -> PathBuf {
    try_default_logs_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for logs");
        PathBuf::from(".paylog").join("logs")
    })
}

/// Try to get the default logs directory, returning None if the home
/// directory is unavailable
pub fn try_default_logs_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".paylog").join("logs"))
}
