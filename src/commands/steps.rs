//! Steps command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use cosmo::presentation::{OutputFormat, StepsView};
use cosmo::ServerSet;

use crate::ui::error::report_resolve_error;

pub fn cmd_steps(
    task: &str,
    server: Option<&str>,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let loaded = super::load_config(config, format)?;
    let mut out = io::stdout().lock();
    print_steps(&loaded.servers, task, server, format, &mut out)
}

/// Resolve `task` and write its steps. Nothing is written before the task
/// has been resolved, except the error report itself.
pub(crate) fn print_steps(
    servers: &ServerSet,
    task: &str,
    server: Option<&str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let resolved = match servers.find_task(task, server) {
        Ok(resolved) => resolved,
        Err(err) => return Err(report_resolve_error(err, format, out)),
    };
    tracing::debug!(task, server = resolved.server_name, "task resolved");

    let view = StepsView::new(resolved);
    match format {
        OutputFormat::Json => crate::ui::json::write_event(out, &view.to_json())?,
        OutputFormat::Text => view.write_to(out)?,
    }
    Ok(())
}
