//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use webship::domain::value_objects::Host;

/// webship - package a static site and roll it out over SSH
#[derive(Parser, Debug)]
#[command(name = "webship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./webship.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by `pack` and `ship`
#[derive(Args, Debug, Default, Clone)]
pub struct PackArgs {
    /// Directory to archive
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Directory receiving the archive
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Flags shared by `deploy` and `ship`
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Target host, `host` or `user@host` (repeatable or comma separated)
    #[arg(long = "host", value_name = "HOST", value_delimiter = ',')]
    pub hosts: Vec<Host>,

    /// Dry run - show the commands without touching any host
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the remaining hosts after the first failure
    #[arg(long)]
    pub stop_on_failure: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Archive the source directory into a timestamped .tgz
    Pack {
        #[command(flatten)]
        pack: PackArgs,
    },

    /// Upload, unpack and activate an archive on every host
    Deploy {
        /// Archive to deploy (e.g. versions/web_static_20240101120000.tgz)
        archive: PathBuf,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Pack, then deploy the new archive
    Ship {
        #[command(flatten)]
        pack: PackArgs,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the remote commands a deploy of ARCHIVE would run
    Plan {
        /// Archive name or path
        archive: PathBuf,
    },
}
