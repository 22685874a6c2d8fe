//! Terminal-facing helpers for the binary: JSON events, error reports and
//! logging setup.

pub mod error;
pub mod json;
pub mod logging;
