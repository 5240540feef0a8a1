// ABOUTME: Centralized resource container shared by every HTTP handler
// ABOUTME: Holds the pantry service and the immutable server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and handed to routers as `Arc<ServerResources>`.

use crate::config::environment::ServerConfig;
use crate::database_plugins::IngredientStore;
use crate::services::PantryService;
use std::sync::Arc;

/// Shared state for route handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Selection and storage workflow
    pub pantry: PantryService,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap `store` in a pantry service alongside `config`
    #[must_use]
    pub fn new(store: Arc<dyn IngredientStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            pantry: PantryService::new(store),
            config,
        }
    }
}
