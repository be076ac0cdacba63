//! Print the export line for the current list

use anyhow::Result;

use crate::cli::context::Context;
use crate::env_file::EnvSource;

/// Execute the print action
///
/// Output is the bare line so it can be used as `eval "$(pathos --print)"`.
pub fn execute(ctx: &Context, env: &dyn EnvSource) -> Result<()> {
    let paths = ctx.env_file.load(env)?;
    println!("{}", ctx.env_file.export_line(&paths)?);
    Ok(())
}
