// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory stores, and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_server`

use pantry_server::{
    config::{DatabaseConfig, ServerConfig},
    database_plugins::{factory::create_store, IngredientStore},
    resources::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh, migrated in-memory store
pub async fn create_test_store() -> Arc<dyn IngredientStore> {
    init_test_logging();
    create_store(&DatabaseConfig::memory())
        .await
        .expect("Failed to create in-memory store")
}

/// Server configuration pointing at an in-memory database
pub fn create_test_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig::memory(),
        ..ServerConfig::default()
    }
}

/// Resources over `store` with test configuration
pub fn create_test_resources(store: Arc<dyn IngredientStore>) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(store, Arc::new(create_test_config())))
}
