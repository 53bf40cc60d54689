//! Error types for configuration loading.
//!
//! The simulation itself never fails; only reading and validating a
//! [`crate::config::Config`] can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
