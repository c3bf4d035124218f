use anyhow::Result;
use webship::presentation::factory;

use super::Context;

pub fn cmd_ship(ctx: &Context, dry_run: bool) -> Result<bool> {
    let use_case = factory::create_ship_use_case(&ctx.config);
    let pack = factory::pack_options(&ctx.config);
    let deploy = factory::deploy_options(&ctx.config).with_dry_run(dry_run);
    let sink = factory::create_event_sink(&ctx.ui, "ship");

    let outcome = use_case.execute_with_events(&pack, &deploy, sink);
    Ok(outcome.is_success())
}
