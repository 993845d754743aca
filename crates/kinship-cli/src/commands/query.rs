//! One-shot relative lookups

use clap::Args;

use crate::output;
use crate::AppContext;

#[derive(Args)]
pub struct QueryArgs {
    /// Names to look up (exact, case-sensitive)
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn run(args: &QueryArgs, ctx: &AppContext) -> anyhow::Result<()> {
    tracing::debug!("Running query for {} name(s)", args.names.len());

    let mut missing = Vec::new();
    for (i, name) in args.names.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let answer = output::answer(&ctx.tree, name, ctx.format)?;
        println!("{}", answer.text());
        if !answer.is_found() {
            missing.push(name.as_str());
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("Not found: {}", missing.join(", "));
    }
    Ok(())
}
