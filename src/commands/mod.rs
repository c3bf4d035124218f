//! Command entry points
//!
//! Each command returns `Ok(true)` on success and `Ok(false)` when the run
//! failed after its failure was already reported. `Err` is reserved for
//! problems the reporting itself could not handle.

pub mod deploy;
pub mod pack;
pub mod plan;
pub mod ship;

use webship::config::Config;
use webship::presentation::UiContext;

use crate::cli::{PackArgs, TargetArgs};

/// Resolved configuration plus output settings
pub struct Context {
    pub config: Config,
    pub ui: UiContext,
}

/// CLI flags take precedence over config and environment
pub fn apply_pack_args(config: &mut Config, args: &PackArgs) {
    if let Some(source) = &args.source {
        config.pack.source = source.clone();
    }
    if let Some(output) = &args.output {
        config.pack.output_dir = output.clone();
    }
}

pub fn apply_target_args(config: &mut Config, args: &TargetArgs) {
    if !args.hosts.is_empty() {
        config.remote.hosts = args.hosts.clone();
    }
    if args.stop_on_failure {
        config.deploy.stop_on_host_failure = true;
    }
}
