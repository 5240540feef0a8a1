// ABOUTME: Route module organization for the pantry HTTP endpoints
// ABOUTME: Each domain module holds route definitions and thin handlers over the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the pantry server
//!
//! Handlers only translate between HTTP and [`crate::services`]; they hold no
//! business rules of their own.

/// Health check and readiness routes
pub mod health;
/// Ingredient catalog, selection, listing and deletion routes
pub mod ingredients;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
