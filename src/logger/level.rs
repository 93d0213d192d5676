//! Ordered log severity levels

use std::fmt;
use std::str::FromStr;

/// Log severity, ordered from most severe (rank 0) to least (rank 7).
///
/// A message is persisted only when its rank is less than or equal to the
/// configured threshold's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

/// All levels in rank order, most severe first
pub const ALL_LEVELS: [LogLevel; 8] = [
    LogLevel::Emergency,
    LogLevel::Alert,
    LogLevel::Critical,
    LogLevel::Error,
    LogLevel::Warning,
    LogLevel::Notice,
    LogLevel::Info,
    LogLevel::Debug,
];

impl LogLevel {
    /// Integer severity rank, 0 (most severe) to 7 (least)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Uppercase display name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "EMERGENCY",
            LogLevel::Alert => "ALERT",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Lowercase name used in configuration
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emergency" => Ok(LogLevel::Emergency),
            "alert" => Ok(LogLevel::Alert),
            "critical" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warning" => Ok(LogLevel::Warning),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(crate::error::Error::config(format!(
                "unrecognized log level: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_ordered() {
        assert_eq!(LogLevel::Emergency.rank(), 0);
        assert_eq!(LogLevel::Error.rank(), 3);
        assert_eq!(LogLevel::Warning.rank(), 4);
        assert_eq!(LogLevel::Debug.rank(), 7);

        for pair in ALL_LEVELS.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_all_names() {
        for level in ALL_LEVELS {
            assert_eq!(level.name().parse::<LogLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        assert!("verbose".parse::<LogLevel>().is_err());
        assert!("ERROR".parse::<LogLevel>().is_err());
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
        assert_eq!(LogLevel::Emergency.to_string(), "EMERGENCY");
    }
}
