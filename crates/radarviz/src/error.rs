#![forbid(unsafe_code)]

//! Top-level error model.
//!
//! Each variant wraps the error of one subsystem so callers can match on
//! what matters and let the rest propagate with `?`.

use radarviz_overlay::InvalidOption;
use radarviz_surface::SurfaceError;

/// Top-level error type for radarviz hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A display tree operation failed.
    #[error("display surface: {0}")]
    Surface(#[from] SurfaceError),
    /// A snapshot could not be serialized.
    #[error("snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    /// A configuration value could not be parsed.
    #[error("config: invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },
}

impl From<InvalidOption> for Error {
    fn from(err: InvalidOption) -> Self {
        Self::Config {
            key: err.key,
            value: err.value,
        }
    }
}

impl Error {
    /// Stable label for logs and metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Surface(_) => "surface",
            Self::Snapshot(_) => "snapshot",
            Self::Config { .. } => "config",
        }
    }
}

/// Standard result type for radarviz APIs.
pub type Result<T> = std::result::Result<T, Error>;
