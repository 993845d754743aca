//! Person (node) types

use serde::{Deserialize, Serialize};

/// Gender of a person, written as `m` or `f` in input files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    /// Short marker shown next to a name
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// A parent pair, stored husband first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parents {
    pub father: String,
    pub mother: String,
}

impl Parents {
    pub fn new(father: impl Into<String>, mother: impl Into<String>) -> Self {
        Self {
            father: father.into(),
            mother: mother.into(),
        }
    }

    /// Both names, father first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.father.as_str(), self.mother.as_str()].into_iter()
    }
}

/// A person in the family tree
///
/// Fields are only written while the tree is being built; afterwards a
/// `Person` is read through its accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    gender: Gender,

    #[serde(skip_serializing_if = "Option::is_none")]
    spouse: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<Parents>,
}

impl Person {
    pub(crate) fn new(gender: Gender) -> Self {
        Self {
            gender,
            spouse: None,
            children: Vec::new(),
            parents: None,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn spouse(&self) -> Option<&str> {
        self.spouse.as_deref()
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }

    /// Whether this person appears in any family unit
    #[cfg(test)]
    pub(crate) fn has_family(&self) -> bool {
        self.spouse.is_some() || self.parents.is_some() || !self.children.is_empty()
    }

    /// Set the spouse, returning the previous one
    pub(crate) fn set_spouse(&mut self, spouse: &str) -> Option<String> {
        self.spouse.replace(spouse.to_string())
    }

    pub(crate) fn clear_spouse(&mut self) {
        self.spouse = None;
    }

    /// Set the parent pair, returning the previous one
    pub(crate) fn set_parents(&mut self, parents: Parents) -> Option<Parents> {
        self.parents.replace(parents)
    }

    pub(crate) fn push_child(&mut self, child: &str) {
        self.children.push(child.to_string());
    }
}
