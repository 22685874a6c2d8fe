use std::io::Write;

use cosmo::presentation::OutputFormat;
use cosmo::{CosmoError, ResolveError};

/// A resolution failure that has already been written to the output sink.
///
/// `main` only sets the exit code for these; it does not print them again.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ReportedError(pub ResolveError);

pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ReportedError>().is_some()
}

/// Write a resolution failure to `out` in the requested format.
pub fn report_resolve_error(
    err: ResolveError,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Error {
    tracing::debug!(kind = err.kind(), "task resolution failed");

    let written = match format {
        OutputFormat::Json => crate::ui::json::write_event(
            out,
            &serde_json::json!({
                "event": "error",
                "kind": err.kind(),
                "message": err.to_string(),
            }),
        ),
        OutputFormat::Text => writeln!(out, "{}", err),
    };

    match written {
        Ok(()) => ReportedError(err).into(),
        Err(io_err) => anyhow::Error::new(io_err).context(err),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {}\n", err);
    if let Some(hint) = err.downcast_ref::<CosmoError>().and_then(hint_for) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

fn hint_for(err: &CosmoError) -> Option<&'static str> {
    match err {
        CosmoError::ConfigNotFound { .. } => {
            Some("create cosmo.toml, set COSMO_CONFIG, or pass --config <path>")
        }
        CosmoError::Validation { .. } => {
            Some("server names and task names must be non-empty and unique")
        }
        CosmoError::InvalidConfig { .. } => {
            Some("each [[servers]] entry needs a name; tasks go in [[servers.tasks]]")
        }
        _ => None,
    }
}
