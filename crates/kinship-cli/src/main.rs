//! Kinship CLI - Look up relatives in a family tree

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, people, query, shell};
use config::Config;
use kinship_core::FamilyTree;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(author, version, about = "Look up a person's relatives in a family tree")]
pub struct Cli {
    /// Family tree file (YAML, or JSON with a .json extension)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive lookup shell (default)
    Shell,
    /// Look up one or more names and exit
    Query(query::QueryArgs),
    /// List everyone in the family tree
    People,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded family tree
pub struct AppContext {
    pub tree: FamilyTree,
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: Config) -> anyhow::Result<Self> {
        let input = cli.file.clone().unwrap_or_else(|| config.input_file.clone());
        tracing::debug!("Using family tree at: {:?}", input);

        let tree = kinship_core::load_tree(&input)
            .with_context(|| format!("Failed to load family tree from {}", input.display()))?;
        tracing::info!("Loaded {} people from {:?}", tree.len(), input);

        let format = cli.format.unwrap_or(config.format);
        Ok(Self {
            tree,
            config,
            format,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting kinship CLI");

    let config_path = cli.config_path();

    match &cli.command {
        Some(Commands::Config(args)) => commands::config::run(args, &config_path)?,
        Some(Commands::Completions(args)) => completions::run(args)?,
        command => {
            let config = Config::load(&config_path)?;
            let ctx = AppContext::new(&cli, config)?;
            match command {
                Some(Commands::Query(args)) => query::run(args, &ctx)?,
                Some(Commands::People) => people::run(&ctx)?,
                _ => shell::run(&ctx)?,
            }
        }
    }

    Ok(())
}
