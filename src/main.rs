//! webship CLI - package a static site and roll it out over SSH
//!
//! Usage: webship <COMMAND>
//!
//! Commands:
//!   pack    Archive the source directory into versions/
//!   deploy  Upload, unpack and activate an archive on every host
//!   ship    Pack, then deploy
//!   plan    Print the remote commands a deploy would run

mod cli;
mod commands;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use webship::config::{self, ConfigWarning};
use webship::logging::{self, LogOptions};
use webship::presentation::UiContext;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_options =
        LogOptions::from_verbosity(cli.verbose).with_ansi(std::io::stderr().is_terminal());
    if let Err(e) = logging::init_logging(log_options) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let loaded = config::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &loaded.path {
        print_config_warnings(path, &loaded.warnings);
    }

    let mut config = loaded.config;
    let ui = UiContext::new(cli.json, cli.verbose, &config.output);

    match cli.command {
        Commands::Pack { pack } => {
            commands::apply_pack_args(&mut config, &pack);
            commands::pack::cmd_pack(&Context { config, ui })
        }
        Commands::Deploy { archive, target } => {
            commands::apply_target_args(&mut config, &target);
            commands::deploy::cmd_deploy(&Context { config, ui }, &archive, target.dry_run)
        }
        Commands::Ship { pack, target } => {
            commands::apply_pack_args(&mut config, &pack);
            commands::apply_target_args(&mut config, &target);
            commands::ship::cmd_ship(&Context { config, ui }, target.dry_run)
        }
        Commands::Plan { archive } => commands::plan::cmd_plan(&Context { config, ui }, &archive),
    }
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line),
            None => eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display()),
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
