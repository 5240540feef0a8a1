// ABOUTME: Storage abstraction for ingredient records
// ABOUTME: Plugin architecture so the selection workflow never depends on a concrete backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient store abstraction
//!
//! The selection workflow consumes storage only through [`IngredientStore`],
//! which mirrors the four document-store calls it needs: look up by name,
//! save, list, and delete by identifier.

use crate::errors::StorageError;
use crate::models::{Ingredient, NewIngredient};
use async_trait::async_trait;

pub mod factory;
pub mod sqlite;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StorageError>;

/// Core storage abstraction trait
///
/// All store implementations must implement this trait to provide
/// a consistent interface for the service layer.
#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// Create the schema if it does not exist yet
    async fn migrate(&self) -> StoreResult<()>;

    /// Human-readable backend description for logs
    fn backend_info(&self) -> &'static str;

    /// Verify the store is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Find a record whose name matches exactly
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Ingredient>>;

    /// Insert a record; the store assigns its identifier
    async fn save(&self, ingredient: NewIngredient) -> StoreResult<Ingredient>;

    /// All records in the store's natural retrieval order
    async fn find_all(&self) -> StoreResult<Vec<Ingredient>>;

    /// Delete the record with this identifier, returning whether one was removed
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;
}
