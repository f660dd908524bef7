//! Common test utilities for building field map documents and selections.
use fieldgen::prelude::*;

/// A document with a list-valued field, a two-value field and a field whose
/// single value arrives as a bare string.
#[allow(dead_code)]
pub fn sample_document() -> &'static str {
    r#"{
        "newFieldName": "cond2",
        "eventFields": {
            "type": ["a", "b", "c"],
            "condition": ["A", "B"],
            "code": "1"
        }
    }"#
}

#[allow(dead_code)]
pub fn sample_catalog() -> FieldCatalog {
    FieldCatalog::load(sample_document()).expect("sample document should load")
}

/// Builds a `FieldMap` from literal entries.
#[allow(dead_code)]
pub fn field_map(entries: &[(&str, &[&str])]) -> FieldMap {
    entries
        .iter()
        .map(|(field, values)| (field.to_string(), strings(values)))
        .collect()
}

#[allow(dead_code)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
