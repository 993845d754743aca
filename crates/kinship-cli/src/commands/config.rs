//! `kinship config`: read and write the TOML settings file

use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::Config;

/// Keys: `input_file`, `exit_command`, `format`
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one setting (input_file, exit_command or format)
    Get {
        /// input_file, exit_command or format
        key: String,
    },
    /// Change one setting, e.g. `set exit_command quit`
    Set {
        /// input_file, exit_command or format
        key: String,
        /// Path for input_file, a word for exit_command, text|json for format
        value: String,
    },
    /// Print the input file, exit command and output format in effect
    List,
    /// Print where the settings file lives
    Path,
    /// Write a settings file with input.yml, exit and text
    Init {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs, path: &Path) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommands::Get { key } => run_get(key, path),
        ConfigCommands::Set { key, value } => run_set(key, value, path),
        ConfigCommands::List => run_list(path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Init { force } => run_init(*force, path),
    }
}

fn run_get(key: &str, path: &Path) -> anyhow::Result<()> {
    let config = Config::load(path)?;
    match config.get(key) {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Unknown config key: {} (available: {})",
            key,
            Config::keys().join(", ")
        ),
    }
    Ok(())
}

fn run_set(key: &str, value: &str, path: &Path) -> anyhow::Result<()> {
    let mut config = Config::load(path)?;
    config.set(key, value)?;
    config.save(path)?;
    tracing::info!("Updated config key {} in {:?}", key, path);
    println!("Set {} = {}", key, value);
    Ok(())
}

fn run_list(path: &Path) -> anyhow::Result<()> {
    let config = Config::load(path)?;
    if !path.exists() {
        println!("# {} not found, showing defaults", path.display());
    }
    for key in Config::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

fn run_init(force: bool, path: &Path) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to reset it to defaults",
            path.display()
        );
    }

    let defaults = Config::default();
    defaults.save(path)?;
    tracing::info!("Wrote default settings to {:?}", path);
    println!(
        "Wrote {} (input_file = {}, exit_command = {}, format = {})",
        path.display(),
        defaults.input_file.display(),
        defaults.exit_command,
        defaults.format
    );
    Ok(())
}
