//! Steps view
//!
//! ```text
//! Steps for task 'deploy' on server 'web1':
//!
//! local
//!   cargo build --release
//!
//! remote
//!   systemctl restart app
//! ```

use std::io::{self, Write};

use serde_json::json;

use crate::domain::entities::Step;
use crate::domain::services::ResolvedTask;

pub struct StepsView<'a> {
    resolved: ResolvedTask<'a>,
}

impl<'a> StepsView<'a> {
    pub fn new(resolved: ResolvedTask<'a>) -> Self {
        Self { resolved }
    }

    /// Header, then one section per non-empty direction.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let task = self.resolved.task;
        writeln!(
            out,
            "Steps for task '{}' on server '{}':",
            task.name, self.resolved.server_name
        )?;

        for (direction, steps) in task.sections() {
            writeln!(out)?;
            writeln!(out, "{}", direction)?;
            for step in steps {
                writeln!(out, "  {}", step.command())?;
            }
        }

        Ok(())
    }

    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let task = self.resolved.task;
        json!({
            "event": "steps",
            "task": task.name,
            "server": self.resolved.server_name,
            "local": commands(&task.local),
            "remote": commands(&task.remote),
        })
    }
}

fn commands(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(Step::command).collect()
}
