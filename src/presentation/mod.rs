//! Presentation Layer
//!
//! Renders resolved domain values as text. Views write to any `io::Write`
//! sink so the binary can target stdout and tests can target a `Vec<u8>`.
//!
//! ## Structure
//!
//! - `output` - Output format selection
//! - `steps` - The `steps` command view
//! - `tasks` - The `tasks` command view

pub mod output;
pub mod steps;
pub mod tasks;

pub use output::OutputFormat;
pub use steps::StepsView;
pub use tasks::TasksView;
