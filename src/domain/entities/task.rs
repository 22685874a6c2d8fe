//! Task entity

use super::step::{Direction, Step};

/// A named unit of deployment logic.
///
/// `name` is unique within its server but may repeat across servers.
/// `server_name` always equals the owning server's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub server_name: String,
    pub local: Vec<Step>,
    pub remote: Vec<Step>,
}

impl Task {
    pub fn new(name: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            server_name: server_name.into(),
            local: Vec::new(),
            remote: Vec::new(),
        }
    }

    pub fn with_local<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local = commands.into_iter().map(Step::new).collect();
        self
    }

    pub fn with_remote<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remote = commands.into_iter().map(Step::new).collect();
        self
    }

    /// Steps for one direction, in execution order.
    pub fn steps(&self, direction: Direction) -> &[Step] {
        match direction {
            Direction::Local => &self.local,
            Direction::Remote => &self.remote,
        }
    }

    /// Both sequences in presentation order, skipping empty ones.
    pub fn sections(&self) -> impl Iterator<Item = (Direction, &[Step])> {
        [Direction::Local, Direction::Remote]
            .into_iter()
            .map(|d| (d, self.steps(d)))
            .filter(|(_, steps)| !steps.is_empty())
    }
}
