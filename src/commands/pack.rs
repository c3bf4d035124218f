use anyhow::Result;
use webship::presentation::factory;

use super::Context;

pub fn cmd_pack(ctx: &Context) -> Result<bool> {
    let use_case = factory::create_pack_use_case();
    let options = factory::pack_options(&ctx.config);
    let sink = factory::create_event_sink(&ctx.ui, "pack");

    match use_case.execute_with_events(&options, sink) {
        Ok(packed) => {
            if !ctx.ui.json {
                println!("{}", packed.path.display());
            }
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
