//! Turns a parsed `CosmoConfig` into a `ServerSet`.

use std::collections::HashSet;

use crate::domain::entities::{Server, ServerSet, Task};

use super::types::{CosmoConfig, ServerConfig, TaskConfig};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server #{index} has an empty name")]
    EmptyServerName { index: usize },

    #[error("server '{server}' is declared more than once")]
    DuplicateServer { server: String },

    #[error("server '{server}' has a task with an empty name")]
    EmptyTaskName { server: String },

    #[error("task '{task}' is declared more than once on server '{server}'")]
    DuplicateTask { server: String, task: String },

    #[error("task '{task}' on server '{server}' has an empty {direction} step")]
    EmptyStep {
        server: String,
        task: String,
        direction: &'static str,
    },
}

impl CosmoConfig {
    /// Validate and build the server set. The first problem found, in
    /// declaration order, is reported.
    pub fn into_server_set(self) -> Result<ServerSet, ConfigValidationError> {
        let mut seen = HashSet::new();
        let mut servers = Vec::with_capacity(self.servers.len());

        for (index, server) in self.servers.into_iter().enumerate() {
            if server.name.trim().is_empty() {
                return Err(ConfigValidationError::EmptyServerName { index: index + 1 });
            }
            if !seen.insert(server.name.clone()) {
                return Err(ConfigValidationError::DuplicateServer {
                    server: server.name,
                });
            }
            servers.push(build_server(server)?);
        }

        Ok(ServerSet::new(servers))
    }
}

fn build_server(config: ServerConfig) -> Result<Server, ConfigValidationError> {
    let mut server = Server::new(&config.name);
    if let Some(host) = config.host {
        server = server.with_host(host);
    }

    let mut seen = HashSet::new();
    for task in config.tasks {
        if task.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyTaskName {
                server: config.name.clone(),
            });
        }
        if !seen.insert(task.name.clone()) {
            return Err(ConfigValidationError::DuplicateTask {
                server: config.name.clone(),
                task: task.name,
            });
        }
        server = server.with_task(build_task(&config.name, task)?);
    }

    Ok(server)
}

fn build_task(server: &str, config: TaskConfig) -> Result<Task, ConfigValidationError> {
    for (direction, steps) in [("local", &config.local), ("remote", &config.remote)] {
        if steps.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigValidationError::EmptyStep {
                server: server.to_string(),
                task: config.name.clone(),
                direction,
            });
        }
    }

    Ok(Task::new(config.name, server)
        .with_local(config.local)
        .with_remote(config.remote))
}
