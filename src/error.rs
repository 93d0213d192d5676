//! Error types for the paylog crate

/// Errors surfaced by logger construction and log emission.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration: empty path or unrecognized level name.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Filesystem failure creating the log directory or appending a line.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a configuration error from any displayable message
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
