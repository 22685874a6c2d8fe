//! Step entity

/// Which machine a step sequence runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The invoking machine
    Local,
    /// The target server
    Remote,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Local => "local",
            Direction::Remote => "remote",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single shell command.
///
/// Direction is not stored on the step: it is implied by the sequence
/// (`Task::local` or `Task::remote`) that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    command: String,
}

impl Step {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl From<&str> for Step {
    fn from(command: &str) -> Self {
        Self::new(command)
    }
}
