use crate::error::{CatalogError, InputError};
use indexmap::IndexMap;
use serde::Deserialize;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the document handed over by the calling process and
// are only used during `load`.

/// A field's legal values on the wire: either a bare string or a list.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum RawFieldValues {
    Single(String),
    Many(Vec<String>),
}

impl RawFieldValues {
    /// Normalizes a bare string to a one-element sequence.
    fn into_values(self) -> Vec<String> {
        match self {
            RawFieldValues::Single(value) => vec![value],
            RawFieldValues::Many(values) => values,
        }
    }
}

#[derive(Deserialize, Debug)]
struct RawDocument {
    #[serde(alias = "newFieldName")]
    new_field_name: String,
    #[serde(alias = "eventFields")]
    event_fields: IndexMap<String, RawFieldValues>,
}

/// The read-only source of fields and their legal values for one session.
///
/// Built once from the input document; keys and value order reflect the
/// document's insertion order. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    new_field_name: String,
    fields: IndexMap<String, Vec<String>>,
}

impl FieldCatalog {
    /// Parses the input document into a catalog.
    ///
    /// Both `newFieldName` and `eventFields` are required; a document that
    /// is not a well-formed object or lacks either key fails with
    /// [`InputError::Malformed`].
    pub fn load(document: &str) -> Result<Self, InputError> {
        let raw: RawDocument = serde_json::from_str(document)
            .map_err(|e| InputError::Malformed(e.to_string()))?;

        let fields = raw
            .event_fields
            .into_iter()
            .map(|(field, values)| (field, values.into_values()))
            .collect();

        Ok(Self {
            new_field_name: raw.new_field_name,
            fields,
        })
    }

    /// The name of the new field this session derives values for.
    pub fn new_field_name(&self) -> &str {
        &self.new_field_name
    }

    /// The legal values of `field`, in document order.
    pub fn values_of(&self, field: &str) -> Result<&[String], CatalogError> {
        self.fields
            .get(field)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::UnknownField(field.to_string()))
    }

    /// All field names, in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.fields.keys().map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
