// ABOUTME: Route handlers for the ingredient REST API
// ABOUTME: Catalog listing, selection submission, stored listing and deletion by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient routes
//!
//! Paths are relative; [`IngredientRoutes::nested`] mounts them under
//! [`crate::constants::routes::INGREDIENTS_BASE_PATH`].

use crate::{
    catalog,
    constants::messages,
    errors::{AppError, SelectionError},
    models::Ingredient,
    resources::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, MethodRouter},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Body of a selection submission
///
/// `selected` stays untyped so the validator decides what a malformed
/// payload means.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionRequest {
    /// Submitted names; `Null` when the field is absent
    #[serde(rename = "selectedIngredients", default)]
    pub selected: Value,
}

/// Catalog listing
#[derive(Debug, Serialize, Deserialize)]
pub struct AvailableIngredientsResponse {
    /// Every selectable name in catalog order
    pub ingredients: Vec<String>,
}

/// Plain message body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message shown to the client
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Body returned when a selection stored new names
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedIngredientsResponse {
    /// Message shown to the client
    pub message: String,
    /// Names inserted by this submission
    #[serde(rename = "newIngredients")]
    pub new_ingredients: Vec<String>,
}

/// Ingredient routes handler
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    ///
    /// `available` and `select` are also valid record identifiers, so those
    /// paths answer DELETE as well.
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/available",
                get(Self::handle_available).merge(Self::delete_literal("available")),
            )
            .route(
                "/select",
                post(Self::handle_select).merge(Self::delete_literal("select")),
            )
            .route("/", get(Self::handle_list))
            .route("/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Mount the routes under `base`, listing with or without a trailing slash
    pub fn nested(base: &str, resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                &format!("{base}/"),
                get(Self::handle_list).with_state(resources.clone()),
            )
            .nest(base, Self::routes(resources))
    }

    /// DELETE handler for an identifier that collides with a static path
    fn delete_literal(id: &'static str) -> MethodRouter<Arc<ServerResources>> {
        delete(move |State(resources): State<Arc<ServerResources>>| async move {
            Self::delete_and_respond(&resources, id).await
        })
    }

    /// Handle GET /available - List the catalog
    async fn handle_available() -> Json<AvailableIngredientsResponse> {
        Json(AvailableIngredientsResponse {
            ingredients: catalog::all().iter().map(|&name| name.to_owned()).collect(),
        })
    }

    /// Handle POST /select - Validate and store a selection
    async fn handle_select(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<SelectionRequest>>,
    ) -> Result<Response, SelectionError> {
        let Json(request) = body.unwrap_or_default();
        let outcome = resources.pantry.submit(&request.selected).await?;

        if outcome.is_empty() {
            return Ok((
                StatusCode::OK,
                Json(MessageResponse::new(messages::ALREADY_SELECTED)),
            )
                .into_response());
        }

        let response = SavedIngredientsResponse {
            message: messages::NEW_INGREDIENTS_SAVED.to_owned(),
            new_ingredients: outcome.newly_added,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET / - List stored ingredients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Vec<Ingredient>>, AppError> {
        Ok(Json(resources.pantry.list_all().await?))
    }

    /// Handle DELETE /:id - Delete a stored ingredient
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        Self::delete_and_respond(&resources, &id).await
    }

    async fn delete_and_respond(
        resources: &ServerResources,
        id: &str,
    ) -> Result<Response, AppError> {
        resources.pantry.delete_by_id(id).await?;

        Ok((
            StatusCode::OK,
            Json(MessageResponse::new(messages::INGREDIENT_DELETED)),
        )
            .into_response())
    }
}
