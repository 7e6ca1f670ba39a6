use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CodePointe - save-triggered deploys for SFDX projects
#[derive(Parser, Debug)]
#[command(name = "codepointe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout instead of console output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch project roots and deploy saves after a short quiet period
    Watch {
        /// Project roots (directories containing .sfdx/)
        #[arg(default_value = ".")]
        roots: Vec<PathBuf>,

        /// Quiet period in milliseconds (overrides config)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Zip every bundle, convert and deploy whole projects
    Compile {
        /// Project roots; directories without .sfdx/ are skipped
        #[arg(default_value = ".")]
        roots: Vec<PathBuf>,
    },

    /// Deploy the given files right away, as one batch per project
    Deploy {
        /// Files inside an SFDX project
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show how paths would be treated by the watcher
    Classify {
        /// Project-relative paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}
