//! Output formatting utilities

use clap::ValueEnum;
use kinship_core::{FamilyTree, Gender, Presenter, RelativeFinder, Relatives};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// Outcome of one lookup, already rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Found(String),
    NotFound(String),
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Self::Found(text) | Self::NotFound(text) => text,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Serialize)]
struct RelativesReport<'a> {
    name: &'a str,
    gender: Gender,
    relatives: &'a Relatives,
}

#[derive(Serialize)]
struct NotFoundReport<'a> {
    name: &'a str,
    error: String,
}

/// Look up `name` and render the result in `format`
pub fn answer(tree: &FamilyTree, name: &str, format: OutputFormat) -> anyhow::Result<Answer> {
    let presenter = Presenter::new(tree);

    let found = (
        RelativeFinder::find(name, tree),
        tree.gender_of(name),
        presenter.heading(name),
    );
    let (relatives, gender, heading) = match found {
        (Some(relatives), Some(gender), Some(heading)) => (relatives, gender, heading),
        _ => {
            tracing::info!("No person named '{}'", name);
            let message = Presenter::not_found(name);
            let text = match format {
                OutputFormat::Text => message,
                OutputFormat::Json => serde_json::to_string_pretty(&NotFoundReport {
                    name,
                    error: message,
                })?,
            };
            return Ok(Answer::NotFound(text));
        }
    };

    let text = match format {
        OutputFormat::Text => format!("{}\n{}", heading, presenter.render(&relatives)),
        OutputFormat::Json => serde_json::to_string_pretty(&RelativesReport {
            name,
            gender,
            relatives: &relatives,
        })?,
    };

    Ok(Answer::Found(text))
}
