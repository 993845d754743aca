//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kinship")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset read when `--file` is not given
    pub input_file: PathBuf,
    /// Word that ends the interactive shell (case-insensitive)
    pub exit_command: String,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("input.yml"),
            exit_command: "exit".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    const KEYS: [&'static str; 3] = ["input_file", "exit_command", "format"];

    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Write config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &Self::KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "input_file" => Some(self.input_file.display().to_string()),
            "exit_command" => Some(self.exit_command.clone()),
            "format" => Some(self.format.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "input_file" => self.input_file = PathBuf::from(value),
            "exit_command" => {
                let value = value.trim();
                if value.is_empty() {
                    anyhow::bail!("exit_command cannot be empty");
                }
                self.exit_command = value.to_string();
            }
            "format" => self.format = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
