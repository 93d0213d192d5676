//! Log file retention management
//!
//! Keeps at most a configured number of dated log files in a directory,
//! deleting the oldest beyond that count. Runs after every append.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Delete the oldest dated log files beyond `retain`
///
/// Matches names of the form `<prefix><YYYYMMDD>.<extension>`, treating the
/// configured prefix and extension as literal text. Files sort by their
/// eight-digit date token, oldest first. Deletion is best-effort: a file
/// that cannot be removed is skipped with a warning and never aborts the
/// scan or the write that triggered it.
///
/// Returns the number of files deleted.
pub fn prune(folder: &Path, prefix: &str, extension: &str, retain: usize) -> usize {
    let pattern = format!(
        "^{}([0-9]{{8}})\\.{}$",
        regex::escape(prefix),
        regex::escape(extension)
    );
    let matcher = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("invalid log file pattern {}: {}", pattern, e);
            return 0;
        }
    };

    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(_) => return 0,
    };

    let mut logs: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(caps) = matcher.captures(name) {
            logs.push((caps[1].to_string(), entry.path()));
        }
    }

    if logs.len() <= retain {
        return 0;
    }

    // Fixed-width numeric tokens, so string order is date order
    logs.sort_by(|a, b| a.0.cmp(&b.0));

    let excess = logs.len() - retain;
    let mut deleted = 0;
    for (_, path) in logs.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => deleted += 1,
            Err(e) => {
                tracing::warn!("failed to delete old log file {}: {}", path.display(), e);
            }
        }
    }

    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    fn matching_names(dir: &Path, prefix: &str, extension: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .flatten()
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .filter(|n| n.starts_with(prefix) && n.ends_with(extension))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_prune_deletes_oldest_beyond_retention() {
        let temp_dir = TempDir::new().unwrap();
        for date in ["20240101", "20240102", "20240103", "20240104", "20240105"] {
            touch(temp_dir.path(), &format!("log_{date}.log"));
        }

        let deleted = prune(temp_dir.path(), "log_", "log", 3);
        assert_eq!(deleted, 2);

        assert_eq!(
            matching_names(temp_dir.path(), "log_", ".log"),
            vec!["log_20240103.log", "log_20240104.log", "log_20240105.log"]
        );
    }

    #[test]
    fn test_prune_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        for date in ["20240101", "20240102", "20240103", "20240104"] {
            touch(temp_dir.path(), &format!("log_{date}.log"));
        }

        assert_eq!(prune(temp_dir.path(), "log_", "log", 3), 1);
        assert_eq!(prune(temp_dir.path(), "log_", "log", 3), 0);
    }

    #[test]
    fn test_prune_under_retention_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "log_20240101.log");
        touch(temp_dir.path(), "log_20240102.log");

        assert_eq!(prune(temp_dir.path(), "log_", "log", 3), 0);
        assert_eq!(matching_names(temp_dir.path(), "log_", ".log").len(), 2);
    }

    #[test]
    fn test_prune_ignores_non_matching_names() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "log_20240101.log");
        touch(temp_dir.path(), "other_20240101.log");
        touch(temp_dir.path(), "log_2024010.log"); // seven digits
        touch(temp_dir.path(), "log_20240101.txt");
        touch(temp_dir.path(), "notes.txt");

        assert_eq!(prune(temp_dir.path(), "log_", "log", 0), 1);

        assert!(!temp_dir.path().join("log_20240101.log").exists());
        assert!(temp_dir.path().join("other_20240101.log").exists());
        assert!(temp_dir.path().join("log_2024010.log").exists());
        assert!(temp_dir.path().join("log_20240101.txt").exists());
        assert!(temp_dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_prune_escapes_regex_metacharacters() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "app.v1+20240101.log");
        touch(temp_dir.path(), "appXv1+20240102.log");

        // The dot in the prefix must not match arbitrary characters
        assert_eq!(prune(temp_dir.path(), "app.v1+", "log", 0), 1);
        assert!(!temp_dir.path().join("app.v1+20240101.log").exists());
        assert!(temp_dir.path().join("appXv1+20240102.log").exists());
    }

    #[test]
    fn test_prune_nonexistent_dir() {
        let deleted = prune(Path::new("/nonexistent/path/for/testing"), "log_", "log", 3);
        assert_eq!(deleted, 0);
    }

    #[test]
    fn test_prune_retain_zero_deletes_all_matches() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "log_20240101.log");
        touch(temp_dir.path(), "log_20240102.log");

        assert_eq!(prune(temp_dir.path(), "log_", "log", 0), 2);
    }
}
