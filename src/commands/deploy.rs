//! Deploy command entry point

use std::path::Path;

use anyhow::Result;
use webship::presentation::factory;

use super::Context;

pub fn cmd_deploy(ctx: &Context, archive: &Path, dry_run: bool) -> Result<bool> {
    let use_case = factory::create_deploy_use_case(&ctx.config);
    let options = factory::deploy_options(&ctx.config).with_dry_run(dry_run);
    let sink = factory::create_event_sink(&ctx.ui, "deploy");

    // Pre-flight errors were reported through the sink as `Aborted`.
    match use_case.execute_with_events(archive, &options, sink) {
        Ok(result) => Ok(result.is_success()),
        Err(e) => {
            tracing::debug!(error = %e, "deploy refused");
            Ok(false)
        }
    }
}
