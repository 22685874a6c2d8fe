//! Domain Layer
//!
//! Pure task-resolution logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Step, Task, Server, ServerSet)
//! - `services/` - Domain services (TaskResolver)
//!
//! Nothing in this layer touches the file system, the network or the terminal.
//! Configuration loading builds a `ServerSet`, and everything downstream only
//! reads it.

pub mod entities;
pub mod services;
