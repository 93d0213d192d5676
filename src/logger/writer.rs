//! File-backed structured logger
//!
//! Owns the resolved log directory and appends one formatted line per emit
//! call to the current day's file, then triggers retention pruning.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use uuid::Uuid;

use super::level::LogLevel;
use super::mask;
use super::record::{LogRecord, Params};
use super::retention;
use crate::config::LoggerConfig;
use crate::error::{Error, Result};

/// Synchronous file logger with level gating, card-data masking and
/// count-based retention of daily files
///
/// Each instance owns its own directory path and opaque instance
/// identifier; nothing is shared between instances beyond the filesystem.
#[derive(Debug)]
pub struct FileLogger {
    folder: PathBuf,
    prefix: String,
    extension: String,
    date_format: String,
    threshold: LogLevel,
    backup_file_rotation: usize,
    instance_id: String,
}

impl FileLogger {
    /// Build a logger from configuration, resolving a relative `path`
    /// against the process working directory
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        Self::with_resolver(config, resolve_against_cwd)
    }

    /// Build a logger with an injected root-resolution function
    ///
    /// `resolve` is called only when the configured path is relative and
    /// must map it to the absolute location it should live under.
    pub fn with_resolver(
        config: &LoggerConfig,
        resolve: impl Fn(&Path) -> PathBuf,
    ) -> Result<Self> {
        if config.path.as_os_str().is_empty() {
            return Err(Error::config("log path must not be empty"));
        }

        let threshold: LogLevel = config.level.parse()?;

        let path = if config.path.is_relative() {
            resolve(&config.path)
        } else {
            config.path.clone()
        };

        create_log_dir(&path)?;
        let folder = fs::canonicalize(&path)?;

        Ok(Self {
            folder,
            prefix: config.prefix.clone(),
            extension: config.extension.clone(),
            date_format: config.date_format.clone(),
            threshold,
            backup_file_rotation: config.backup_file_rotation,
            instance_id: Uuid::new_v4().simple().to_string(),
        })
    }

    /// True iff a message at `level` would be persisted under the
    /// configured threshold
    pub fn register(&self, level: LogLevel) -> bool {
        level.rank() <= self.threshold.rank()
    }

    /// Current time rendered with the configured `date_format`
    pub fn timestamp(&self) -> String {
        Local::now().format(&self.date_format).to_string()
    }

    /// Path the next write would append to, named for the current date
    ///
    /// Recomputed per call, so a process running across midnight starts a
    /// new file instead of appending to yesterday's.
    pub fn current_file_path(&self) -> PathBuf {
        let date = Local::now().format("%Y%m%d");
        self.folder
            .join(format!("{}{}.{}", self.prefix, date, self.extension))
    }

    /// Resolved directory the log files live in
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Opaque identifier stamped on every record this instance emits
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn debug(
        &self,
        origin: impl Into<String>,
        kind: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
        params: Params,
    ) -> Result<()> {
        self.emit(LogLevel::Debug, origin, kind, code, detail, params)
    }

    pub fn info(
        &self,
        origin: impl Into<String>,
        kind: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
        params: Params,
    ) -> Result<()> {
        self.emit(LogLevel::Info, origin, kind, code, detail, params)
    }

    pub fn warning(
        &self,
        origin: impl Into<String>,
        kind: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
        params: Params,
    ) -> Result<()> {
        self.emit(LogLevel::Warning, origin, kind, code, detail, params)
    }

    pub fn error(
        &self,
        origin: impl Into<String>,
        kind: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
        params: Params,
    ) -> Result<()> {
        self.emit(LogLevel::Error, origin, kind, code, detail, params)
    }

    fn emit(
        &self,
        level: LogLevel,
        origin: impl Into<String>,
        kind: impl Into<String>,
        code: impl Into<String>,
        detail: impl Into<String>,
        params: Params,
    ) -> Result<()> {
        if !self.register(level) {
            return Ok(());
        }

        let record = LogRecord {
            timestamp: Local::now(),
            instance_id: self.instance_id.clone(),
            level,
            origin: origin.into(),
            kind: kind.into(),
            code: code.into(),
            detail: detail.into(),
            params: mask::apply(params),
        };

        self.write(&record.render(&self.date_format))
    }

    /// Append one line to the current day's file, then prune old files
    ///
    /// The file handle is scoped to this call and released before pruning
    /// runs, whether or not the write succeeded.
    fn write(&self, line: &str) -> Result<()> {
        let path = self.current_file_path();
        {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            file.write_all(line.as_bytes())?;
        }

        let deleted = retention::prune(
            &self.folder,
            &self.prefix,
            &self.extension,
            self.backup_file_rotation,
        );
        if deleted > 0 {
            tracing::debug!(
                "pruned {} old log file(s) from {}",
                deleted,
                self.folder.display()
            );
        }

        Ok(())
    }
}

/// Default root resolution: join relative paths onto the process working
/// directory
fn resolve_against_cwd(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            tracing::warn!("could not determine working directory: {}", e);
            path.to_path_buf()
        }
    }
}

#[cfg(unix)]
fn create_log_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o775).create(path)
}

#[cfg(not(unix))]
fn create_log_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
