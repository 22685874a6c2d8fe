//! Configuration module for Cosmo
//!
//! Config file discovery, highest priority first:
//! 1. `--config <path>` flag
//! 2. `COSMO_CONFIG` environment variable
//! 3. `./cosmo.toml` in the working directory
//! 4. User config (`~/.config/cosmo/cosmo.toml`)
//!
//! The file is parsed, validated and turned into a read-only `ServerSet`.

mod loader;
mod types;
mod validate;

pub use loader::{
    discover, load, load_str, ConfigWarning, LoadedConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME,
};
pub use types::{CosmoConfig, ServerConfig, TaskConfig};
pub use validate::ConfigValidationError;
