use crate::registry::FieldMap;

/// Transient per-workflow state holding the field/value selections the user
/// is assembling before committing them as one named combination.
///
/// Holds at most one entry per field; selecting no values for a field
/// removes its entry rather than keeping an empty one.
#[derive(Debug, Clone, Default)]
pub struct SelectionBuffer {
    entries: FieldMap,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current selection for `field`.
    ///
    /// An empty `values` slice removes any existing entry for the field;
    /// otherwise the entry is overwritten with a copy of `values`.
    pub fn set_selection(&mut self, field: &str, values: &[String]) {
        if values.is_empty() {
            self.entries.shift_remove(field);
        } else {
            self.entries.insert(field.to_string(), values.to_vec());
        }
    }

    /// Empties the buffer. Called after every successful commit.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The selections assembled so far.
    pub fn current(&self) -> &FieldMap {
        &self.entries
    }

    /// An independent copy of the current selections.
    pub fn snapshot(&self) -> FieldMap {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
