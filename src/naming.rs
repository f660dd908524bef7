use crate::error::NamingError;
use crate::registry::FieldMap;

/// How the name of each produced combination is derived in the
/// double-combination workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `associated value + main value`, e.g. main `"A"` with associated
    /// `"x"` yields `"xA"`.
    AppendAssociatedToMain,
    /// `main value + associated value`, e.g. main `"A"` with associated
    /// `"x"` yields `"Ax"`.
    AppendMainToAssociated,
    /// One caller-supplied name per associated value, in order.
    Manual(Vec<String>),
}

/// One value of a main field associated with several values of another
/// field, producing one new combination per associated value.
#[derive(Debug, Clone)]
pub struct DoubleCombination {
    pub main_field: String,
    pub main_value: String,
    pub associated_field: String,
    pub associated_values: Vec<String>,
    pub strategy: NamingStrategy,
}

impl DoubleCombination {
    /// Derives the `(name, field map)` pair for every associated value.
    ///
    /// Each field map has the shape
    /// `{main_field: [main_value], associated_field: [associated_value]}`.
    /// With [`NamingStrategy::Manual`], the name list must have exactly one
    /// entry per associated value.
    pub fn pairings(&self) -> Result<Vec<(String, FieldMap)>, NamingError> {
        let names: Vec<String> = match &self.strategy {
            NamingStrategy::AppendAssociatedToMain => self
                .associated_values
                .iter()
                .map(|value| format!("{}{}", value, self.main_value))
                .collect(),
            NamingStrategy::AppendMainToAssociated => self
                .associated_values
                .iter()
                .map(|value| format!("{}{}", self.main_value, value))
                .collect(),
            NamingStrategy::Manual(names) => {
                if names.len() != self.associated_values.len() {
                    return Err(NamingError::ManualNameCount {
                        expected: self.associated_values.len(),
                        provided: names.len(),
                    });
                }
                names.clone()
            }
        };

        let pairings = names
            .into_iter()
            .zip(&self.associated_values)
            .map(|(name, value)| {
                let mut field_map = FieldMap::new();
                field_map.insert(self.main_field.clone(), vec![self.main_value.clone()]);
                field_map.insert(self.associated_field.clone(), vec![value.clone()]);
                (name, field_map)
            })
            .collect();

        Ok(pairings)
    }
}
