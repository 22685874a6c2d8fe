//! JSON output utilities for CLI commands.
//!
//! Every command in `--json` mode writes NDJSON: one object per line, each
//! carrying an `event` field.

use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")
}
