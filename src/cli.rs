use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ResponseOrdering, DEFAULT_API};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "intelboard",
    about = "Intelboard - browse dated attack reports and their lessons",
    version
)]
pub struct Args {
    /// Base URL of the reports API
    #[arg(long, env = "INTELBOARD_API", default_value = DEFAULT_API, global = true)]
    pub api: String,

    /// Read reports from a local directory instead of the API
    #[arg(long, env = "INTELBOARD_REPORTS_DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Which response wins when selections overlap
    #[arg(long, value_enum, default_value = "latest-selection", global = true)]
    pub ordering: ResponseOrdering,

    /// Enable verbose logging of all operations
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide spinners and only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List available reports, newest first
    List,
    /// Show one report (defaults to the newest)
    Show {
        identifier: Option<String>,
    },
    /// Show the report published as latest
    Latest,
    /// Write the dashboard as a standalone HTML page
    Snapshot {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Report to select after the newest one has loaded
        #[arg(short, long)]
        report: Option<String>,
    },
}
