//! Domain Services
//!
//! Stateless services operating on domain entities.

pub mod task_resolver;

pub use task_resolver::{ResolveError, ResolvedTask, TaskResolver};
