// ABOUTME: System-wide constants for the Pantry ingredient selection service
// ABOUTME: Selection rules, user-facing messages, service identity, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Rules applied to submitted ingredient selections
pub mod selection {
    /// Minimum number of entries a selection must contain
    pub const MIN_SELECTIONS: usize = 3;

    /// Quantity stored for records created from a selection
    pub const UNSPECIFIED_QUANTITY: &str = "N/A";
}

/// Client-facing response messages
pub mod messages {
    /// Selection contained fewer than the minimum number of entries
    pub const TOO_FEW_SELECTIONS: &str = "Please select at least 3 ingredients.";

    /// Prefix for the list of names missing from the catalog
    pub const INVALID_INGREDIENTS_PREFIX: &str = "Invalid ingredients selected";

    /// Every selected name was already stored
    pub const ALREADY_SELECTED: &str = "These ingredients are already selected before.";

    /// At least one selected name was newly stored
    pub const NEW_INGREDIENTS_SAVED: &str = "New ingredients saved successfully";

    /// Selection processing hit a storage failure
    pub const SELECTION_FAILED: &str = "Error processing ingredients";

    /// Deletion acknowledged
    pub const INGREDIENT_DELETED: &str = "Ingredient deleted";
}

/// Service identity used in logs and health output
pub mod service_names {
    /// Name of the HTTP server binary and logging service
    pub const PANTRY_SERVER: &str = "pantry-server";
}

/// HTTP routing constants
pub mod routes {
    /// Base path the ingredient routes are nested under
    pub const INGREDIENTS_BASE_PATH: &str = "/api/ingredients";

    /// Header carrying the per-request correlation identifier
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Default values for environment configuration
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 5000;

    /// Default bind address
    pub const HOST: &str = "0.0.0.0";

    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/pantry.db";

    /// Default connection pool size for file-backed databases
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;

    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}
