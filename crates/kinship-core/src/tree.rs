//! Family tree construction

use crate::error::{Error, Result};
use crate::family::{Dataset, FamilyRole, FamilyUnit, PersonSpec};
use crate::person::{Gender, Parents, Person};
use std::collections::{HashMap, HashSet};

/// Name-to-person mapping, built once and read-only afterwards
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    people: HashMap<String, Person>,
}

impl FamilyTree {
    /// Build the tree from declared people and family units
    ///
    /// Family units are applied in order. A later unit that gives someone a
    /// different spouse or parent pair replaces the earlier one. Every name
    /// used in a unit must be declared in `people`; otherwise the build fails
    /// with [`Error::DanglingReference`].
    pub fn build(people: &HashMap<String, PersonSpec>, families: &[FamilyUnit]) -> Result<Self> {
        let mut tree: HashMap<String, Person> = people
            .iter()
            .map(|(name, spec)| (name.clone(), Person::new(spec.gender)))
            .collect();

        for (index, family) in families.iter().enumerate() {
            let (husband, wife) = family.pair(index)?;

            marry(&mut tree, husband, wife)?;

            let mut seen: HashSet<&str> = HashSet::new();
            for child in family.children() {
                if !seen.insert(child.as_str()) {
                    tracing::warn!(
                        "Child '{}' is listed more than once in family #{}",
                        child,
                        index + 1
                    );
                }

                let previous = person_mut(&mut tree, child, FamilyRole::Child)?
                    .set_parents(Parents::new(husband, wife));
                if let Some(previous) = previous {
                    if previous.father != husband || previous.mother != wife {
                        tracing::debug!(
                            "Parents of '{}' reassigned from {} & {} to {} & {}",
                            child,
                            previous.father,
                            previous.mother,
                            husband,
                            wife
                        );
                    }
                }

                person_mut(&mut tree, husband, FamilyRole::Husband)?.push_child(child);
                person_mut(&mut tree, wife, FamilyRole::Wife)?.push_child(child);
            }
        }

        tracing::debug!(
            "Built family tree: {} people, {} families",
            tree.len(),
            families.len()
        );

        Ok(Self { people: tree })
    }

    /// Build the tree from a loaded dataset
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        Self::build(&dataset.people, &dataset.families)
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    pub fn gender_of(&self, name: &str) -> Option<Gender> {
        self.people.get(name).map(Person::gender)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All people, in no particular order
    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Person)> {
        self.people.iter().map(|(name, person)| (name.as_str(), person))
    }

    /// All names, sorted
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.people.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn person_mut<'a>(
    tree: &'a mut HashMap<String, Person>,
    name: &str,
    role: FamilyRole,
) -> Result<&'a mut Person> {
    tree.get_mut(name).ok_or_else(|| Error::DanglingReference {
        name: name.to_string(),
        role,
    })
}

/// Link a couple, detaching any earlier spouse that still points back
fn marry(tree: &mut HashMap<String, Person>, husband: &str, wife: &str) -> Result<()> {
    // both must exist before anything is written
    person_mut(tree, husband, FamilyRole::Husband)?;
    person_mut(tree, wife, FamilyRole::Wife)?;

    let previous_husband = person_mut(tree, husband, FamilyRole::Husband)?.set_spouse(wife);
    let previous_wife = person_mut(tree, wife, FamilyRole::Wife)?.set_spouse(husband);

    for (name, spouse, previous) in [
        (husband, wife, previous_husband),
        (wife, husband, previous_wife),
    ] {
        let Some(previous) = previous else { continue };
        if previous == spouse {
            continue;
        }
        tracing::warn!("Spouse of '{}' reassigned from {} to {}", name, previous, spouse);
        if let Some(former) = tree.get_mut(&previous) {
            if former.spouse() == Some(name) {
                former.clear_spouse();
            }
        }
    }
    Ok(())
}
