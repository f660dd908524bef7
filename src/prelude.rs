//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the fieldgen crate so that
//! callers can bring the whole workflow surface into scope with one import.

// Core session types
pub use crate::catalog::FieldCatalog;
pub use crate::registry::{CombinationRegistry, FieldMap};
pub use crate::selection::SelectionBuffer;
pub use crate::workflow::{BatchReport, WorkflowController};

// Double-combination naming
pub use crate::naming::{DoubleCombination, NamingStrategy};

// Error types
pub use crate::error::{CatalogError, CommitError, InputError, NamingError};

// Ordered map type used throughout this crate
pub use indexmap::IndexMap;
