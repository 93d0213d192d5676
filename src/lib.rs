//! paylog - file-based structured logger for payment SDKs
//!
//! Writes leveled, timestamped log lines to date-named files, masks
//! payment-card fields before persisting, and prunes old files beyond a
//! configured retention count.
//!
//! ```no_run
//! use paylog::{FileLogger, LoggerConfig, Params};
//!
//! # fn main() -> paylog::Result<()> {
//! let mut config = LoggerConfig::default();
//! config.path = "logs".into();
//! config.level = "info".to_string();
//!
//! let logger = FileLogger::new(&config)?;
//!
//! let mut params = Params::new();
//! params.insert("pan", "4111111111111111");
//! params.insert("amount", "10.00");
//! logger.info("checkout", "request", "100", "authorize card", params)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logger;

pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use logger::{FileLogger, LogLevel, LogRecord, Params, Value};
