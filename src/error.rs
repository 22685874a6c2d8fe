//! Error types for Cosmo
//!
//! Library errors use `thiserror`; command handlers wrap them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigValidationError;

/// Result type alias for Cosmo operations
pub type CosmoResult<T> = Result<T, CosmoError>;

/// Main error type for Cosmo operations
#[derive(Error, Debug)]
pub enum CosmoError {
    /// No configuration file in any searched location
    #[error("no configuration file found (searched: {})", display_paths(.searched))]
    ConfigNotFound { searched: Vec<PathBuf> },

    /// Invalid TOML in a configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Well-formed TOML that describes an inconsistent server set
    #[error("invalid configuration in {file}: {source}")]
    Validation {
        file: PathBuf,
        #[source]
        source: ConfigValidationError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
