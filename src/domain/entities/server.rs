//! Server and ServerSet entities

use std::collections::BTreeMap;

use super::task::Task;

/// A named deployment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub name: String,
    pub host: Option<String>,
    tasks: BTreeMap<String, Task>,
}

impl Server {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: None,
            tasks: BTreeMap::new(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Add a task, re-homing it onto this server.
    ///
    /// A task with the same name replaces the previous one; rejecting
    /// duplicates is the configuration loader's job.
    pub fn with_task(mut self, mut task: Task) -> Self {
        task.server_name = self.name.clone();
        self.tasks.insert(task.name.clone(), task);
        self
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// Tasks ordered by name.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

/// Every known server, in declared order.
///
/// Built once from configuration and never mutated afterwards. Callers pass
/// it around explicitly, so independent sets can coexist (e.g. in tests).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerSet {
    servers: Vec<Server>,
}

impl ServerSet {
    pub fn new(servers: Vec<Server>) -> Self {
        Self { servers }
    }

    pub fn server(&self, name: &str) -> Option<&Server> {
        self.servers.iter().find(|s| s.name == name)
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }
}

impl FromIterator<Server> for ServerSet {
    fn from_iter<I: IntoIterator<Item = Server>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
