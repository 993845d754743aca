//! Text rendering of relatives with gender markers

use crate::relatives::{Category, Relatives};
use crate::tree::FamilyTree;

/// Renders lookup results against the tree they came from
pub struct Presenter<'a> {
    tree: &'a FamilyTree,
}

impl<'a> Presenter<'a> {
    pub fn new(tree: &'a FamilyTree) -> Self {
        Self { tree }
    }

    /// `Name (m)`, or `None` if the name is not in the tree
    pub fn annotate(&self, name: &str) -> Option<String> {
        self.tree
            .gender_of(name)
            .map(|gender| format!("{} ({})", name, gender.marker()))
    }

    /// Line introducing a person's relatives
    pub fn heading(&self, name: &str) -> Option<String> {
        self.annotate(name)
            .map(|annotated| format!("{} has the following relatives:", annotated))
    }

    /// Message for a name that is not in the tree
    pub fn not_found(name: &str) -> String {
        format!("Name '{}' is not present in the family tree", name)
    }

    /// One line per non-empty category, e.g. `Parents: Ivan (m), Olga (f)`
    pub fn render(&self, relatives: &Relatives) -> String {
        if relatives.is_empty() {
            return "(no known relatives)".to_string();
        }

        let lines: Vec<String> = relatives
            .categories()
            .into_iter()
            .filter_map(|(category, names)| self.render_category(category, &names))
            .collect();

        if lines.is_empty() {
            "(no known relatives)".to_string()
        } else {
            lines.join("\n")
        }
    }

    fn render_category(&self, category: Category, names: &[&str]) -> Option<String> {
        let annotated: Vec<String> = names
            .iter()
            .filter_map(|name| {
                let entry = self.annotate(name);
                if entry.is_none() {
                    tracing::warn!(
                        "Skipping {} entry '{}': not present in the family tree",
                        category.label(),
                        name
                    );
                }
                entry
            })
            .collect();

        if annotated.is_empty() {
            return None;
        }
        Some(format!("{}: {}", category.label(), annotated.join(", ")))
    }
}
