// ABOUTME: Store factory that turns database configuration into a ready ingredient store
// ABOUTME: Prepares the file location, opens the backend, and runs schema bootstrap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Store factory for creating ingredient store providers
//!
//! This module selects the backend from the configured [`DatabaseUrl`] and
//! returns it behind the [`IngredientStore`] trait object.

use super::sqlite::SqliteIngredientStore;
use super::IngredientStore;
use crate::config::database::{DatabaseConfig, DatabaseUrl};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Open and migrate the store described by `config`
///
/// # Errors
///
/// Returns an error if the database directory cannot be created, the
/// connection fails, or the schema bootstrap fails
pub async fn create_store(config: &DatabaseConfig) -> Result<Arc<dyn IngredientStore>> {
    if let DatabaseUrl::SQLite { path } = &config.url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
            debug!("Ensured database directory {}", parent.display());
        }
    }

    let store = SqliteIngredientStore::connect(config)
        .await
        .with_context(|| format!("Failed to open database {}", config.url))?;
    store
        .migrate()
        .await
        .context("Failed to run ingredient schema migration")?;

    info!(
        database.backend = store.backend_info(),
        database.url = %config.url,
        database.pool = config.effective_max_connections(),
        "Ingredient store ready"
    );

    Ok(Arc::new(store))
}
