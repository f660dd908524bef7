use crate::error::CommitError;
use indexmap::IndexMap;
use serde::Serialize;

/// An ordered mapping from field name to the values selected for it.
///
/// `FieldMap` has value semantics: `clone()` copies every value list, so a
/// committed map is fully independent of the buffer it came from.
pub type FieldMap = IndexMap<String, Vec<String>>;

/// The accumulated set of committed new field values for one session.
///
/// Names are unique and keep their insertion order; re-committing an
/// existing name overwrites its field map in place. Serializes to the
/// output document shape `{valueName: {fieldName: [value, ...], ...}, ...}`
/// with every value list rendered as a JSON array.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CombinationRegistry {
    combinations: IndexMap<String, FieldMap>,
}

impl CombinationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a deep copy of `field_map` under `name`.
    ///
    /// Fails with [`CommitError::EmptyName`] for an empty name and
    /// [`CommitError::EmptyFieldMap`] for a mapping with no entries; in
    /// either case the registry is left unchanged.
    pub fn commit(&mut self, name: &str, field_map: &FieldMap) -> Result<(), CommitError> {
        if name.is_empty() {
            return Err(CommitError::EmptyName);
        }
        if field_map.is_empty() {
            return Err(CommitError::EmptyFieldMap);
        }

        self.combinations.insert(name.to_string(), field_map.clone());
        Ok(())
    }

    /// Deletes the entry for `name`; a no-op when absent. The order of the
    /// remaining names is preserved.
    pub fn remove(&mut self, name: &str) {
        self.combinations.shift_remove(name);
    }

    /// The stored field map for `name`. Returned by immutable reference;
    /// the registry's copy cannot be mutated through it.
    pub fn get(&self, name: &str) -> Option<&FieldMap> {
        self.combinations.get(name)
    }

    /// Committed value names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone {
        self.combinations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMap)> {
        self.combinations.iter().map(|(name, map)| (name.as_str(), map))
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    /// Serializes the registry to the output document consumed by the
    /// calling process.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
