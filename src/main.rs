//! CodePointe CLI - save-triggered deploys for SFDX projects
//!
//! Usage: codepointe <COMMAND>
//!
//! Commands:
//!   watch     Watch project roots and deploy saves
//!   compile   Convert and deploy whole projects
//!   deploy    Deploy given files right away
//!   classify  Show how paths would be treated

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::ui::context::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose);

    match cli.command {
        Commands::Watch { roots, debounce_ms } => commands::watch::cmd_watch(&roots, debounce_ms, ui),
        Commands::Compile { roots } => commands::compile::cmd_compile(&roots, ui),
        Commands::Deploy { files } => commands::deploy::cmd_deploy(&files, ui),
        Commands::Classify { paths } => commands::classify::cmd_classify(&paths, ui),
    }
}
