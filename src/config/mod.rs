// ABOUTME: Configuration management module for server settings loaded from the environment
// ABOUTME: Groups server, database, and CORS configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pantry Server
//!
//! Configuration is environment-only; there is no configuration file.
//!
//! - **Environment**: server bind address, deployment mode, CORS policy
//! - **Database**: ingredient store location and pool sizing

/// Database location and pool configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, Environment, ServerConfig};
