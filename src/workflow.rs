use crate::catalog::FieldCatalog;
use crate::error::{CatalogError, CommitError, NamingError};
use crate::naming::DoubleCombination;
use crate::registry::CombinationRegistry;
use crate::selection::SelectionBuffer;

/// The outcome of a double-combination batch.
///
/// Commits within a batch are independent: one failed validation does not
/// roll back the combinations committed before or after it.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub committed: Vec<String>,
    pub failures: Vec<(String, CommitError)>,
}

/// Orchestrates one session: reads from the catalog, stages selections in
/// the buffer, and commits validated combinations to the registry.
///
/// All three collaborators are owned and passed in explicitly; there is no
/// shared or ambient state.
#[derive(Debug)]
pub struct WorkflowController {
    catalog: FieldCatalog,
    buffer: SelectionBuffer,
    registry: CombinationRegistry,
}

impl WorkflowController {
    pub fn new(catalog: FieldCatalog) -> Self {
        Self {
            catalog,
            buffer: SelectionBuffer::new(),
            registry: CombinationRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn buffer(&self) -> &SelectionBuffer {
        &self.buffer
    }

    pub fn registry(&self) -> &CombinationRegistry {
        &self.registry
    }

    /// Stages the selected values for `field` in the pending buffer.
    ///
    /// The field must exist in the catalog; an empty selection removes the
    /// field's entry from the buffer.
    pub fn select_values(&mut self, field: &str, values: &[String]) -> Result<(), CatalogError> {
        self.catalog.values_of(field)?;
        self.buffer.set_selection(field, values);
        Ok(())
    }

    /// Discards the in-progress buffer without touching the registry.
    pub fn abandon(&mut self) {
        self.buffer.clear();
    }

    /// Commits the pending buffer to the registry under `name`.
    ///
    /// On validation failure the buffer is left intact so the user can fix
    /// the input and retry; on success it is cleared for the next
    /// combination.
    pub fn commit_pending(&mut self, name: &str) -> Result<(), CommitError> {
        self.registry.commit(name, self.buffer.current())?;
        self.buffer.clear();
        Ok(())
    }

    /// Derives and commits one combination per associated value of
    /// `combination`, each committed independently.
    pub fn commit_double(
        &mut self,
        combination: &DoubleCombination,
    ) -> Result<BatchReport, NamingError> {
        let mut report = BatchReport::default();
        for (name, field_map) in combination.pairings()? {
            match self.registry.commit(&name, &field_map) {
                Ok(()) => report.committed.push(name),
                Err(error) => report.failures.push((name, error)),
            }
        }
        Ok(report)
    }

    /// Removes a committed combination; a no-op when `name` is unknown.
    pub fn remove_combination(&mut self, name: &str) {
        self.registry.remove(name);
    }

    /// Consumes the controller, yielding the registry for serialization on
    /// process exit.
    pub fn into_registry(self) -> CombinationRegistry {
        self.registry
    }
}
