//! Tasks view: servers in declared order with their tasks.

use std::io::{self, Write};

use serde_json::json;

use crate::domain::entities::Server;

pub struct TasksView<'a> {
    servers: Vec<&'a Server>,
}

impl<'a> TasksView<'a> {
    pub fn new(servers: Vec<&'a Server>) -> Self {
        Self { servers }
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.servers.is_empty() {
            writeln!(out, "No servers configured.")?;
            return Ok(());
        }

        for (idx, server) in self.servers.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            match &server.host {
                Some(host) => writeln!(out, "{} ({})", server.name, host)?,
                None => writeln!(out, "{}", server.name)?,
            }

            if server.task_count() == 0 {
                writeln!(out, "  (no tasks)")?;
                continue;
            }

            let width = server.tasks().map(|t| t.name.len()).max().unwrap_or(0);
            for task in server.tasks() {
                writeln!(
                    out,
                    "  {:<width$}  local: {}  remote: {}",
                    task.name,
                    task.local.len(),
                    task.remote.len(),
                    width = width
                )?;
            }
        }

        Ok(())
    }

    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let servers: Vec<_> = self
            .servers
            .iter()
            .map(|server| {
                let tasks: Vec<&str> = server.tasks().map(|t| t.name.as_str()).collect();
                json!({
                    "name": server.name,
                    "host": server.host,
                    "tasks": tasks,
                })
            })
            .collect();

        json!({ "event": "tasks", "servers": servers })
    }
}
