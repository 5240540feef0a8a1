// ABOUTME: Validation of a submitted ingredient selection against the catalog
// ABOUTME: Enforces the minimum count and reports every unknown name in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog;
use crate::constants::selection::MIN_SELECTIONS;
use crate::errors::SelectionError;
use serde_json::Value;

/// A selection that passed validation, in submission order
///
/// Names are kept exactly as submitted: no trimming, no case folding, and
/// repeated names are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSelection(Vec<String>);

impl ValidSelection {
    /// Names in submission order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Consume into the underlying names
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

/// Validate the raw `selectedIngredients` value of a request
///
/// `selected` is `Value::Null` when the field was absent.
///
/// # Errors
///
/// - [`SelectionError::TooFewSelections`] if `selected` is not an array or has
///   fewer than three entries
/// - [`SelectionError::UnknownIngredients`] listing every entry missing from the
///   catalog, in submission order; non-string entries are reported as their
///   JSON text
pub fn validate_selection(selected: &Value) -> Result<ValidSelection, SelectionError> {
    let Some(entries) = selected.as_array() else {
        return Err(SelectionError::TooFewSelections);
    };
    if entries.len() < MIN_SELECTIONS {
        return Err(SelectionError::TooFewSelections);
    }

    let mut names = Vec::with_capacity(entries.len());
    let mut unknown = Vec::new();
    for entry in entries {
        match entry.as_str() {
            Some(name) if catalog::contains(name) => names.push(name.to_owned()),
            Some(name) => unknown.push(name.to_owned()),
            None => unknown.push(entry.to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(ValidSelection(names))
    } else {
        Err(SelectionError::UnknownIngredients(unknown))
    }
}
