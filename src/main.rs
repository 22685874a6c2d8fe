//! Cosmo CLI
//!
//! Usage: cosmo <COMMAND>
//!
//! Commands:
//!   steps   Print the steps a task would run
//!   tasks   List configured servers and their tasks

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cosmo::presentation::OutputFormat;

mod cli;
mod commands;
mod ui;

use cli::{server_filter, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    ui::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !ui::error::is_reported(&err) {
                eprint!("{}", ui::error::format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_json_flag(cli.json);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Steps { task, server } => {
            commands::steps::cmd_steps(&task, server_filter(server.as_deref()), config, format)
        }
        Commands::Tasks { server } => {
            commands::tasks::cmd_tasks(server_filter(server.as_deref()), config, format)
        }
    }
}
