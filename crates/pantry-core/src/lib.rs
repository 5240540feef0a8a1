// ABOUTME: Core types and constants for the Pantry ingredient selection service
// ABOUTME: Foundation crate with error handling, the ingredient catalog, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pantry Core
//!
//! Foundation crate providing shared types and constants for the Pantry
//! ingredient selection service. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, `StorageError`, and `SelectionError`
//! - **constants**: Application-wide constants organized by domain
//! - **catalog**: The fixed allow-list of selectable ingredient names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Fixed catalog of ingredient names that may be selected
pub mod catalog;
