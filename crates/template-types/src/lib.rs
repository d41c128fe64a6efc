//! Shared letter-template types
//!
//! This crate holds the data model exchanged between the extraction engine
//! and its callers (dashboard screens, template persistence). It carries no
//! parsing logic of its own.

pub mod types;

pub use types::{ExtractionResult, TemplateCategory, VariableInfo};
