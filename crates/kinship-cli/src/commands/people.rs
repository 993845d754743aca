//! List declared people

use serde::Serialize;

use crate::output::OutputFormat;
use crate::AppContext;
use kinship_core::Gender;

#[derive(Serialize)]
struct PersonEntry<'a> {
    name: &'a str,
    gender: Gender,
}

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let entries: Vec<PersonEntry> = ctx
        .tree
        .sorted_names()
        .into_iter()
        .filter_map(|name| {
            ctx.tree
                .gender_of(name)
                .map(|gender| PersonEntry { name, gender })
        })
        .collect();

    tracing::info!("Listing {} people", entries.len());

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("No people in the family tree");
            } else {
                println!("People ({} found):", entries.len());
                for entry in &entries {
                    println!("  {} ({})", entry.name, entry.gender);
                }
            }
        }
    }

    Ok(())
}
