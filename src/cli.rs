use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Cosmo - run deployment tasks locally and on remote servers
#[derive(Parser, Debug)]
#[command(name = "cosmo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output one JSON object per line (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $COSMO_CONFIG, then ./cosmo.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the steps a task would run, locally and on its server
    Steps {
        /// Task name
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        task: String,

        /// Server to look the task up on (required when several servers define it)
        #[arg(short, long, value_name = "NAME")]
        server: Option<String>,
    },

    /// List configured servers and their tasks
    Tasks {
        /// Only list tasks of this server
        #[arg(short, long, value_name = "NAME")]
        server: Option<String>,
    },
}

/// `--server` as a lookup filter. An empty value (`--server=`) means no
/// filter, same as leaving the flag out.
pub fn server_filter(server: Option<&str>) -> Option<&str> {
    server.filter(|name| !name.is_empty())
}
