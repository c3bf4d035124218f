//! Plan command: print the remote commands without running them

use std::path::Path;

use anyhow::{Context as _, Result};
use webship::presentation::{factory, render_plan, render_plan_json};

use super::Context;

pub fn cmd_plan(ctx: &Context, archive: &Path) -> Result<bool> {
    let use_case = factory::create_deploy_use_case(&ctx.config);
    let options = factory::deploy_options(&ctx.config);
    let plan = use_case
        .plan(archive, &options)
        .with_context(|| format!("cannot plan a deploy of {}", archive.display()))?;

    if ctx.ui.json {
        println!("{}", serde_json::to_string_pretty(&render_plan_json(&plan))?);
    } else {
        print!("{}", render_plan(&plan, &ctx.ui));
    }
    Ok(true)
}
