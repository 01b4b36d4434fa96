//! Required-field checks shared by every draft type

use crate::error::CatalogError;

/// Collects the names of required fields that were absent or empty
pub(crate) struct RequiredFields {
    entity: &'static str,
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new(entity: &'static str) -> Self {
        Self {
            entity,
            missing: Vec::new(),
        }
    }

    /// Text must be present and non-empty
    pub(crate) fn text(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !value.is_empty() => Some(value),
            _ => {
                self.missing.push(field);
                None
            }
        }
    }

    pub(crate) fn number(&mut self, field: &'static str, value: Option<i64>) -> Option<i64> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    pub(crate) fn into_error(self) -> CatalogError {
        CatalogError::validation(format!(
            "{} is missing required fields: {}",
            self.entity,
            self.missing.join(", ")
        ))
    }
}
