use thiserror::Error;

/// Errors that can occur while loading the input field map document.
#[derive(Error, Debug, Clone)]
pub enum InputError {
    #[error("No field map document was provided")]
    MissingArgument,

    #[error("Failed to parse field map JSON: {0}")]
    Malformed(String),
}

/// Errors raised by catalog lookups.
///
/// An unknown field is a programming-contract violation: the catalog is the
/// only source of field names, so callers should never ask for one it does
/// not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Field '{0}' is not present in the field catalog")]
    UnknownField(String),
}

/// Validation errors raised when committing a combination to the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error("New value name must not be empty")]
    EmptyName,

    #[error("No associated fields and field values were selected")]
    EmptyFieldMap,
}

/// Errors raised while deriving names for a double-combination batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("Manual naming requires {expected} names, but {provided} were provided")]
    ManualNameCount { expected: usize, provided: usize },
}
