// ABOUTME: HTTP server assembly for the pantry service
// ABOUTME: Builds the router and its layers, binds the listener, and shuts down on signal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pantry Server
//!
//! Ingredient routes are nested under
//! [`INGREDIENTS_BASE_PATH`](crate::constants::routes::INGREDIENTS_BASE_PATH);
//! health routes sit at the root. Anything else gets a JSON 404.

use crate::config::environment::ServerConfig;
use crate::constants::routes::INGREDIENTS_BASE_PATH;
use crate::database_plugins::IngredientStore;
use crate::errors::AppError;
use crate::middleware::{propagate_request_id, set_request_id, setup_cors, RequestSpanMaker};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, IngredientRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The pantry HTTP server
pub struct PantryServer {
    resources: Arc<ServerResources>,
}

impl PantryServer {
    /// Create a server over `store`
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn IngredientStore>) -> Self {
        Self {
            resources: Arc::new(ServerResources::new(store, Arc::new(config))),
        }
    }

    /// Assemble the full application router with middleware
    pub fn router(&self) -> Router {
        let resources = &self.resources;

        Router::new()
            .merge(HealthRoutes::routes(resources.clone()))
            .merge(IngredientRoutes::nested(
                INGREDIENTS_BASE_PATH,
                resources.clone(),
            ))
            .fallback(Self::handle_not_found)
            .layer(setup_cors(&resources.config))
            .layer(propagate_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(RequestSpanMaker))
            .layer(set_request_id())
    }

    async fn handle_not_found() -> AppError {
        AppError::not_found("Route")
    }

    /// Bind and serve until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let config = &self.resources.config;
        let address = config.bind_address();
        info!("{}", config.summary());

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        info!(address = %address, "Pantry server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Pantry server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
