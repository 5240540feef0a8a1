// ABOUTME: Stored ingredient record and the payload used to create one
// ABOUTME: Wire shape matches the document-store convention of an `_id` identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! An [`Ingredient`] is created when a selection names something not yet
//! stored, is never updated in place, and is removed only by explicit
//! deletion. Uniqueness of `name` is maintained by the selection workflow,
//! not by the store.

use crate::constants::selection::UNSPECIFIED_QUANTITY;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Catalog name at the time of creation
    pub name: String,
    /// Free-form quantity, `"N/A"` when unspecified
    pub quantity: String,
}

/// Fields supplied when creating an ingredient; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIngredient {
    /// Catalog name
    pub name: String,
    /// Free-form quantity
    pub quantity: String,
}

impl NewIngredient {
    /// Record for a freshly selected name with an unspecified quantity
    pub fn selected(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: UNSPECIFIED_QUANTITY.to_owned(),
        }
    }

    /// Attach the identifier chosen by the store
    #[must_use]
    pub fn into_ingredient(self, id: Uuid) -> Ingredient {
        Ingredient {
            id,
            name: self.name,
            quantity: self.quantity,
        }
    }
}
