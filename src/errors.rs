// ABOUTME: Unified error types re-exported from pantry-core
// ABOUTME: Keeps crate-local paths (crate::errors::AppError) stable for handlers and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pantry_core::errors::*;
