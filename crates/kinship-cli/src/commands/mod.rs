//! CLI command implementations

pub mod completions;
pub mod config;
pub mod people;
pub mod query;
pub mod shell;
