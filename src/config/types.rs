//! Configuration type definitions

use serde::Deserialize;

/// Root of `cosmo.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CosmoConfig {
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// One `[[servers]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub name: String,

    /// SSH destination (`user@host`). Informational only.
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// One `[[servers.tasks]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub name: String,

    #[serde(default)]
    pub local: Vec<String>,

    #[serde(default)]
    pub remote: Vec<String>,
}
