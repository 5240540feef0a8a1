// ABOUTME: Structured error types for ingredient store operations
// ABOUTME: Carries the failed operation and underlying cause so handlers can surface it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure reported by an ingredient store backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// A query or statement failed
    #[error("{operation} failed: {message}")]
    Query {
        /// Store operation that failed (`find_by_name`, `save`, ...)
        operation: &'static str,
        /// Underlying driver message
        message: String,
    },

    /// The store could not be reached or opened
    #[error("storage connection failed: {0}")]
    Connection(String),

    /// A stored row could not be decoded into a record
    #[error("stored record {id} is corrupt: {reason}")]
    Corrupt {
        /// Identifier of the unreadable record
        id: String,
        /// What could not be decoded
        reason: String,
    },
}

impl StorageError {
    /// Build a query error for the named operation
    pub fn query(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Query {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(feature = "database-errors")]
impl StorageError {
    /// Map a driver error raised while running `operation`
    #[must_use]
    pub fn from_sqlx(operation: &'static str, error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Connection(error.to_string())
            }
            _ => Self::query(operation, error.to_string()),
        }
    }
}
