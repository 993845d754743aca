//! Input records: declared people and family units

use crate::error::{Error, Result};
use crate::person::Gender;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attributes declared for a person in the `people` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSpec {
    pub gender: Gender,
}

impl PersonSpec {
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }
}

/// Which slot of a family unit a name was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyRole {
    Husband,
    Wife,
    Child,
}

impl std::fmt::Display for FamilyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Husband => "husband",
            Self::Wife => "wife",
            Self::Child => "child",
        };
        f.write_str(s)
    }
}

/// A family unit: one husband/wife pair and their children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyUnit {
    /// Husband first, then wife
    pub parents: Vec<String>,

    /// Optional; a missing or null list means no children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
}

impl FamilyUnit {
    pub fn new(husband: impl Into<String>, wife: impl Into<String>) -> Self {
        Self {
            parents: vec![husband.into(), wife.into()],
            children: None,
        }
    }

    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    /// The `(husband, wife)` pair, or an error if `parents` is not two names
    pub fn pair(&self, index: usize) -> Result<(&str, &str)> {
        match self.parents.as_slice() {
            [husband, wife] => Ok((husband.as_str(), wife.as_str())),
            other => Err(Error::MalformedInput(format!(
                "family #{} must list exactly two parents, found {}",
                index + 1,
                other.len()
            ))),
        }
    }

    pub fn children(&self) -> &[String] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// A whole input document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub people: HashMap<String, PersonSpec>,
    pub families: Vec<FamilyUnit>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, name: impl Into<String>, gender: Gender) -> Self {
        self.people.insert(name.into(), PersonSpec::new(gender));
        self
    }

    pub fn with_family(mut self, family: FamilyUnit) -> Self {
        self.families.push(family);
        self
    }
}
