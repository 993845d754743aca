//! Dataset loading from YAML or JSON documents

use crate::error::{Error, Result};
use crate::family::Dataset;
use crate::limits;
use crate::tree::FamilyTree;
use std::path::Path;

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Pick a format from the file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and validate a dataset file
pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    tracing::debug!("Loading dataset from {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&content, InputFormat::from_path(path))
}

/// Parse and validate a dataset document
pub fn parse(content: &str, format: InputFormat) -> Result<Dataset> {
    let dataset: Dataset = match format {
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Json => serde_json::from_str(content)?,
    };

    validate(&dataset)?;

    tracing::debug!(
        "Parsed dataset: {} people, {} families",
        dataset.people.len(),
        dataset.families.len()
    );

    Ok(dataset)
}

/// Load a dataset file and build its family tree
pub fn load_tree(path: impl AsRef<Path>) -> Result<FamilyTree> {
    let dataset = load(path)?;
    FamilyTree::from_dataset(&dataset)
}

/// Structural checks that do not need the built tree
fn validate(dataset: &Dataset) -> Result<()> {
    limits::validate_people_count(dataset.people.len())?;
    limits::validate_family_count(dataset.families.len())?;

    for name in dataset.people.keys() {
        limits::validate_person_name(name)?;
    }

    for (index, family) in dataset.families.iter().enumerate() {
        let (husband, wife) = family.pair(index)?;
        for name in [husband, wife] {
            limits::validate_person_name(name).map_err(|e| {
                Error::MalformedInput(format!("family #{}: {}", index + 1, e))
            })?;
        }

        limits::validate_children_count(family.children().len())?;
        for child in family.children() {
            limits::validate_person_name(child).map_err(|e| {
                Error::MalformedInput(format!("family #{}: {}", index + 1, e))
            })?;
        }
    }

    Ok(())
}
