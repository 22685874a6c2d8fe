//! Tasks command handler

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use cosmo::presentation::{OutputFormat, TasksView};
use cosmo::{ResolveError, ServerSet};

use crate::ui::error::report_resolve_error;

pub fn cmd_tasks(server: Option<&str>, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let loaded = super::load_config(config, format)?;
    let mut out = io::stdout().lock();
    print_tasks(&loaded.servers, server, format, &mut out)
}

pub(crate) fn print_tasks(
    servers: &ServerSet,
    server: Option<&str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let selected = match server {
        Some(name) => match servers.server(name) {
            Some(found) => vec![found],
            None => {
                let err = ResolveError::ServerNotFound {
                    server: name.to_string(),
                };
                return Err(report_resolve_error(err, format, out));
            }
        },
        None => servers.servers().iter().collect(),
    };

    let view = TasksView::new(selected);
    match format {
        OutputFormat::Json => crate::ui::json::write_event(out, &view.to_json())?,
        OutputFormat::Text => view.write_to(out)?,
    }
    Ok(())
}
