// ABOUTME: SQLite implementation of the ingredient store
// ABOUTME: One row per ingredient record, identifiers are UUIDs assigned on insert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` ingredient store
//!
//! Names are indexed but deliberately not unique: uniqueness is the
//! selection workflow's job, and two racing submissions may both insert.

use super::{IngredientStore, StoreResult};
use crate::config::database::{DatabaseConfig, DatabaseUrl};
use crate::errors::StorageError;
use crate::models::{Ingredient, NewIngredient};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// `SQLite`-backed ingredient store
#[derive(Clone)]
pub struct SqliteIngredientStore {
    pool: SqlitePool,
}

impl SqliteIngredientStore {
    /// Open a connection pool for the configured location
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = match &config.url {
            DatabaseUrl::SQLite { path } => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
            DatabaseUrl::Memory => SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| StorageError::Connection(e.to_string()))?,
        };

        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.url.is_memory() {
            // Closing the only connection would discard the whole database
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_ingredient(row: &SqliteRow) -> StoreResult<Ingredient> {
        let id: String = row.get("id");
        let parsed = Uuid::parse_str(&id).map_err(|e| StorageError::Corrupt {
            id: id.clone(),
            reason: e.to_string(),
        })?;

        Ok(Ingredient {
            id: parsed,
            name: row.get("name"),
            quantity: row.get("quantity"),
        })
    }
}

#[async_trait]
impl IngredientStore for SqliteIngredientStore {
    async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                quantity TEXT NOT NULL DEFAULT 'N/A',
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("migrate", &e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_ingredients_name ON ingredients(name)")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("migrate", &e))?;

        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "SQLite"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("ping", &e))?;
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Ingredient>> {
        let row = sqlx::query(
            r"
            SELECT id, name, quantity FROM ingredients
            WHERE name = $1
            ORDER BY rowid
            LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("find_by_name", &e))?;

        row.as_ref().map(Self::row_to_ingredient).transpose()
    }

    async fn save(&self, ingredient: NewIngredient) -> StoreResult<Ingredient> {
        let id = Uuid::new_v4();

        sqlx::query(
            r"
            INSERT INTO ingredients (id, name, quantity, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(id.to_string())
        .bind(&ingredient.name)
        .bind(&ingredient.quantity)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("save", &e))?;

        debug!(ingredient.id = %id, ingredient.name = %ingredient.name, "Inserted ingredient row");
        Ok(ingredient.into_ingredient(id))
    }

    async fn find_all(&self) -> StoreResult<Vec<Ingredient>> {
        let rows = sqlx::query("SELECT id, name, quantity FROM ingredients ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("find_all", &e))?;

        rows.iter().map(Self::row_to_ingredient).collect()
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("delete_by_id", &e))?;

        Ok(result.rows_affected() > 0)
    }
}
