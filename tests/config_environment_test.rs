// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, and errors that name the offending variable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_server::config::{DatabaseUrl, Environment, ServerConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 6] = [
    "HTTP_PORT",
    "HOST",
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 5000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/pantry.db")
        }
    );
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.cors.allowed_origins, "*");
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "8081");
    env::set_var("HOST", "127.0.0.1");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://pantry.example.com");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert!(config.database.url.is_memory());
    assert_eq!(config.database.effective_max_connections(), 1);
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins, "https://pantry.example.com");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("HTTP_PORT"));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_database_settings_are_errors() {
    clear_env();
    env::set_var("DATABASE_MAX_CONNECTIONS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("DATABASE_URL", "postgresql://localhost/pantry");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}
