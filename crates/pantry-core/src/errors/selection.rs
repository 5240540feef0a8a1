// ABOUTME: Error taxonomy for submitting an ingredient selection
// ABOUTME: Client errors for bad selections, server error for storage failures, with HTTP mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::database::StorageError;
use crate::constants::messages;
use serde::Serialize;
use thiserror::Error;

/// Why a selection submission did not complete
///
/// The `Display` output of the two client variants is the exact message
/// returned to the caller.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Payload was not a list, or listed fewer than the minimum entries
    #[error("{}", messages::TOO_FEW_SELECTIONS)]
    TooFewSelections,

    /// Entries not present in the catalog, in submission order
    #[error("{}: {}", messages::INVALID_INGREDIENTS_PREFIX, .0.join(", "))]
    UnknownIngredients(Vec<String>),

    /// The store failed while persisting; earlier writes are kept
    #[error(transparent)]
    StorageFailure(#[from] StorageError),
}

impl SelectionError {
    /// Whether the caller is at fault
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::StorageFailure(_))
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

/// Response body for a failed selection
#[derive(Debug, Serialize)]
pub struct SelectionErrorBody {
    /// Message shown to the client
    pub message: String,
    /// Underlying storage cause, only for server errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SelectionError> for SelectionErrorBody {
    fn from(error: &SelectionError) -> Self {
        match error {
            SelectionError::StorageFailure(cause) => Self {
                message: messages::SELECTION_FAILED.to_owned(),
                error: Some(cause.to_string()),
            },
            other => Self {
                message: other.to_string(),
                error: None,
            },
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for SelectionError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if let Self::StorageFailure(cause) = &self {
            tracing::error!(error = %cause, "Failed to persist ingredient selection");
        }

        (status, axum::Json(SelectionErrorBody::from(&self))).into_response()
    }
}
