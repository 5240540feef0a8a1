// ABOUTME: Main library entry point for the Pantry ingredient selection service
// ABOUTME: Provides the ingredient catalog, selection workflow, storage plugins, and REST routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Server
//!
//! A small REST service that exposes a fixed catalog of cooking ingredients
//! and records which of them a user has selected.
//!
//! ## Architecture
//!
//! - **Catalog**: static allow-list of ingredient names (in `pantry-core`)
//! - **Services**: selection validation and the insert-if-absent persister
//! - **Database plugins**: the `IngredientStore` capability and its `SQLite` backend
//! - **Routes**: thin axum handlers that shape service outcomes into responses
//! - **Config / Logging**: environment-driven configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantry_server::config::environment::ServerConfig;
//! use pantry_server::database_plugins::factory::create_store;
//! use pantry_server::server::PantryServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = create_store(&config.database).await?;
//!     PantryServer::new(config, store).run().await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Ingredient store capability and backends
pub mod database_plugins;

/// Re-export of the unified error types from `pantry-core`
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for CORS and request tracing
pub mod middleware;

/// Stored ingredient records
pub mod models;

/// Shared state handed to route handlers
pub mod resources;

/// `HTTP` route definitions
pub mod routes;

/// Server assembly, binding, and graceful shutdown
pub mod server;

/// Selection validation and persistence logic
pub mod services;

pub use pantry_core::{catalog, constants};
