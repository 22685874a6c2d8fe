//! Task resolver
//!
//! Maps a task name and an optional server filter to exactly one task.

use crate::domain::entities::{ServerSet, Task};

/// A successfully resolved task and the server it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTask<'a> {
    pub task: &'a Task,
    pub server_name: &'a str,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("server '{server}' not found")]
    ServerNotFound { server: String },

    #[error("{}", task_not_found_message(.task, .server))]
    TaskNotFound {
        task: String,
        server: Option<String>,
    },

    #[error(
        "task '{task}' is defined on multiple servers ({}), use --server to choose one",
        join_names(.servers)
    )]
    AmbiguousTask { task: String, servers: Vec<String> },
}

impl ResolveError {
    /// Stable identifier used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::ServerNotFound { .. } => "server_not_found",
            ResolveError::TaskNotFound { .. } => "task_not_found",
            ResolveError::AmbiguousTask { .. } => "ambiguous_task",
        }
    }
}

fn task_not_found_message(task: &str, server: &Option<String>) -> String {
    match server {
        Some(server) => format!("task '{}' not found on server '{}'", task, server),
        None => format!("task '{}' not found", task),
    }
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

/// Looks tasks up in a `ServerSet`.
///
/// An unfiltered lookup that matches on more than one server is an error,
/// never a silent pick: the caller has to name the server.
#[derive(Debug, Clone, Copy)]
pub struct TaskResolver<'a> {
    servers: &'a ServerSet,
}

impl<'a> TaskResolver<'a> {
    pub fn new(servers: &'a ServerSet) -> Self {
        Self { servers }
    }

    pub fn resolve(
        &self,
        task_name: &str,
        server_filter: Option<&str>,
    ) -> Result<ResolvedTask<'a>, ResolveError> {
        match server_filter {
            Some(server_name) => self.resolve_on(task_name, server_name),
            None => self.resolve_anywhere(task_name),
        }
    }

    fn resolve_on(
        &self,
        task_name: &str,
        server_name: &str,
    ) -> Result<ResolvedTask<'a>, ResolveError> {
        let server = self
            .servers
            .server(server_name)
            .ok_or_else(|| ResolveError::ServerNotFound {
                server: server_name.to_string(),
            })?;

        let task = server
            .task(task_name)
            .ok_or_else(|| ResolveError::TaskNotFound {
                task: task_name.to_string(),
                server: Some(server.name.clone()),
            })?;

        Ok(ResolvedTask {
            task,
            server_name: &server.name,
        })
    }

    fn resolve_anywhere(&self, task_name: &str) -> Result<ResolvedTask<'a>, ResolveError> {
        let mut matches: Vec<ResolvedTask<'a>> = self
            .servers
            .servers()
            .iter()
            .filter_map(|server| {
                server.task(task_name).map(|task| ResolvedTask {
                    task,
                    server_name: &server.name,
                })
            })
            .collect();

        match matches.len() {
            0 => Err(ResolveError::TaskNotFound {
                task: task_name.to_string(),
                server: None,
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(ResolveError::AmbiguousTask {
                task: task_name.to_string(),
                servers: matches
                    .iter()
                    .map(|m| m.server_name.to_string())
                    .collect(),
            }),
        }
    }
}

impl ServerSet {
    /// Shorthand for `TaskResolver::new(self).resolve(..)`.
    pub fn find_task(
        &self,
        task_name: &str,
        server_filter: Option<&str>,
    ) -> Result<ResolvedTask<'_>, ResolveError> {
        TaskResolver::new(self).resolve(task_name, server_filter)
    }
}
