#![forbid(unsafe_code)]

//! Style rule definitions and catalog

pub mod builtin;
mod catalog;
mod result;
mod rule;

// Re-export core types
pub use builtin::RuleDefinition;
pub use catalog::{Catalog, CatalogEntry, RuleStatus};
pub use result::ValidationResult;
pub use rule::StyleRule;
