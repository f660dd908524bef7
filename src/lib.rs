//! # Fieldgen - Field Value Combination Tool
//!
//! **Fieldgen** derives new categorical "field values" by combining
//! existing field/value pairs from an imported event field map. It is
//! launched by an external caller (originally an EEGLAB plugin) with a JSON
//! document describing the available fields, drives an interactive session
//! in which the user assembles named combinations, and prints the committed
//! combinations as a JSON document on standard output for the caller to
//! parse.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: parse the input document into a read-only [`catalog::FieldCatalog`].
//! 2.  **Select**: stage field/value selections in a [`selection::SelectionBuffer`],
//!     either directly (single combination) or via a
//!     [`naming::DoubleCombination`] batch.
//! 3.  **Commit**: validate and store each named combination in the
//!     [`registry::CombinationRegistry`]. Committed entries are deep copies,
//!     independent of later buffer edits.
//! 4.  **Emit**: serialize the registry to the output document on exit.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldgen::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = r#"{
//!         "newFieldName": "cond2",
//!         "eventFields": {"type": ["a", "b", "c"], "code": "1"}
//!     }"#;
//!
//!     let catalog = FieldCatalog::load(document)?;
//!     let mut controller = WorkflowController::new(catalog);
//!
//!     // Single combination: several values of one field under one name.
//!     controller.select_values("type", &["a".to_string(), "b".to_string()])?;
//!     controller.commit_pending("ab")?;
//!
//!     // Double combination: one main value crossed with associated values.
//!     let combination = DoubleCombination {
//!         main_field: "code".to_string(),
//!         main_value: "1".to_string(),
//!         associated_field: "type".to_string(),
//!         associated_values: vec!["a".to_string(), "c".to_string()],
//!         strategy: NamingStrategy::AppendAssociatedToMain,
//!     };
//!     let report = controller.commit_double(&combination)?;
//!     assert_eq!(report.committed, vec!["a1", "c1"]);
//!
//!     println!("{}", controller.into_registry().to_json()?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod naming;
pub mod prelude;
pub mod registry;
pub mod selection;
pub mod workflow;
