// ABOUTME: Pantry workflow over the ingredient store
// ABOUTME: Sequential insert-if-absent persistence plus list and delete operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pantry service
//!
//! Persistence walks the selection one name at a time: look the name up,
//! insert it if absent, skip it otherwise. A store failure stops the walk
//! and names already inserted stay inserted. Two concurrent submissions of
//! the same new name can both insert; nothing here serialises them.

use super::selection::{validate_selection, ValidSelection};
use crate::database_plugins::{IngredientStore, StoreResult};
use crate::errors::SelectionError;
use crate::models::{Ingredient, NewIngredient};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Names that were stored by a persist call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistOutcome {
    /// Names inserted by this call, in submission order
    #[serde(rename = "newIngredients")]
    pub newly_added: Vec<String>,
}

impl PersistOutcome {
    /// True when every submitted name was already stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.newly_added.is_empty()
    }
}

/// Selection and storage operations shared by the HTTP handlers
#[derive(Clone)]
pub struct PantryService {
    store: Arc<dyn IngredientStore>,
}

impl PantryService {
    /// Create a service over `store`
    #[must_use]
    pub fn new(store: Arc<dyn IngredientStore>) -> Self {
        Self { store }
    }

    /// Validate then persist a raw `selectedIngredients` value
    ///
    /// # Errors
    ///
    /// Returns the validation error, or `StorageFailure` if the store failed
    /// part way; see [`validate_selection`] and [`Self::persist`]
    pub async fn submit(&self, selected: &Value) -> Result<PersistOutcome, SelectionError> {
        let selection = validate_selection(selected)
            .inspect_err(|e| warn!(reason = %e, "Rejected ingredient selection"))?;

        Ok(self.persist(&selection).await?)
    }

    /// Store every name in `selection` that is not stored yet
    ///
    /// # Errors
    ///
    /// Returns the first store error; earlier inserts are not rolled back and
    /// later names are not attempted
    pub async fn persist(&self, selection: &ValidSelection) -> StoreResult<PersistOutcome> {
        let mut outcome = PersistOutcome::default();

        for name in selection.names() {
            let existing = self.store.find_by_name(name).await.inspect_err(|e| {
                error!(ingredient.name = %name, error = %e, "Ingredient lookup failed");
            })?;
            if existing.is_some() {
                continue;
            }

            let saved = self
                .store
                .save(NewIngredient::selected(name.as_str()))
                .await
                .inspect_err(|e| {
                    error!(ingredient.name = %name, error = %e, "Ingredient insert failed");
                })?;
            info!(ingredient.id = %saved.id, ingredient.name = %saved.name, "Saved new ingredient");
            outcome.newly_added.push(saved.name);
        }

        Ok(outcome)
    }

    /// Every stored ingredient in the store's natural order
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn list_all(&self) -> StoreResult<Vec<Ingredient>> {
        self.store.find_all().await
    }

    /// Delete by identifier; succeeds whether or not a record existed
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails
    pub async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let removed = self.store.delete_by_id(id).await?;
        info!(ingredient.id = %id, removed, "Ingredient delete requested");
        Ok(())
    }

    /// Check the backing store is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not answer
    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}
