//! Kinship Core - Family tree model and relative lookup
//!
//! This crate loads a genealogy dataset (people and family units), builds
//! an immutable [`FamilyTree`] from it, and answers relative lookups.

pub mod error;
pub mod family;
pub mod limits;
pub mod loader;
pub mod person;
pub mod presenter;
pub mod relatives;
pub mod tree;

pub use error::{Error, Result};
pub use family::{Dataset, FamilyRole, FamilyUnit, PersonSpec};
pub use loader::{load, load_tree, parse, InputFormat};
pub use person::{Gender, Parents, Person};
pub use presenter::Presenter;
pub use relatives::{Category, RelativeFinder, Relatives};
pub use tree::FamilyTree;
