use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assetkit")]
#[command(about = "Inspect the well-known attribute catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log level (trace|debug|info|warn|error); checked even when logging is off
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every catalog entry
    #[command(alias = "ls")]
    List,

    /// Show one descriptor by its attribute name (e.g. `email`)
    Show {
        attribute_name: String,

        /// Print the descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print core version
    Version,
}
