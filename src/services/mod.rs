// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Selection validation and the pantry persistence workflow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! This module contains protocol-agnostic business logic extracted from route
//! handlers. Handlers only translate between HTTP and these services.

/// Pantry workflow: persist selections, list and delete stored ingredients
pub mod pantry;

/// Selection validation against the ingredient catalog
pub mod selection;

pub use pantry::{PantryService, PersistOutcome};
pub use selection::{validate_selection, ValidSelection};
