//! Relative lookup over a built family tree

use crate::person::Parents;
use crate::tree::FamilyTree;
use serde::Serialize;

/// Fixed relation categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Spouse,
    Parents,
    Siblings,
    Grandparents,
    Children,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Spouse,
        Category::Parents,
        Category::Siblings,
        Category::Grandparents,
        Category::Children,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Spouse => "Spouse",
            Self::Parents => "Parents",
            Self::Siblings => "Siblings",
            Self::Grandparents => "Grandparents",
            Self::Children => "Children",
        }
    }
}

/// Relatives of one person; empty categories are left empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relatives {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Parents>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub grandparents: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl Relatives {
    /// True when no category has members
    pub fn is_empty(&self) -> bool {
        self.spouse.is_none()
            && self.parents.is_none()
            && self.siblings.is_empty()
            && self.grandparents.is_empty()
            && self.children.is_empty()
    }

    /// Names in one category
    pub fn names(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Spouse => self.spouse.iter().map(String::as_str).collect(),
            Category::Parents => self.parents.iter().flat_map(Parents::iter).collect(),
            Category::Siblings => self.siblings.iter().map(String::as_str).collect(),
            Category::Grandparents => self.grandparents.iter().map(String::as_str).collect(),
            Category::Children => self.children.iter().map(String::as_str).collect(),
        }
    }

    /// Non-empty categories with their names, in display order
    pub fn categories(&self) -> Vec<(Category, Vec<&str>)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.names(category)))
            .filter(|(_, names)| !names.is_empty())
            .collect()
    }
}

/// Relative finder
pub struct RelativeFinder;

impl RelativeFinder {
    /// Find the relatives of `name`, or `None` if the name is not in the tree
    pub fn find(name: &str, tree: &FamilyTree) -> Option<Relatives> {
        let person = tree.get(name)?;

        tracing::debug!("Finding relatives of {}", name);

        let parents = person.parents().cloned();
        let (siblings, grandparents) = match &parents {
            Some(parents) => (
                Self::siblings(name, parents, tree),
                Self::grandparents(parents, tree),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Some(Relatives {
            spouse: person.spouse().map(str::to_string),
            parents,
            siblings,
            grandparents,
            children: person.children().to_vec(),
        })
    }

    /// Children of either parent except `name`, first appearance wins
    fn siblings(name: &str, parents: &Parents, tree: &FamilyTree) -> Vec<String> {
        let mut siblings: Vec<String> = Vec::new();

        for parent in parents.iter().filter_map(|p| tree.get(p)) {
            for child in parent.children() {
                if child != name && !siblings.contains(child) {
                    siblings.push(child.clone());
                }
            }
        }

        siblings
    }

    /// Parents of each parent, without duplicates
    fn grandparents(parents: &Parents, tree: &FamilyTree) -> Vec<String> {
        let mut grandparents: Vec<String> = Vec::new();

        let pairs = parents
            .iter()
            .filter_map(|p| tree.get(p))
            .filter_map(|parent| parent.parents());
        for grandparent in pairs.flat_map(Parents::iter) {
            if !grandparents.iter().any(|g| g == grandparent) {
                grandparents.push(grandparent.to_string());
            }
        }

        grandparents
    }
}
