//! Cosmo - task runner for deploying to remote servers
//!
//! A configuration file describes servers, each server owns named tasks, and
//! each task carries two ordered step sequences: commands for the invoking
//! machine and commands for the server. This crate loads that configuration
//! and resolves a task name (optionally scoped to one server) to exactly one
//! task definition.

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use config::{ConfigWarning, LoadedConfig};
pub use domain::entities::{Direction, Server, ServerSet, Step, Task};
pub use domain::services::{ResolveError, ResolvedTask, TaskResolver};
pub use error::{CosmoError, CosmoResult};
pub use presentation::{OutputFormat, StepsView, TasksView};
