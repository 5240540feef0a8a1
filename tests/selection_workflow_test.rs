// ABOUTME: Integration tests for the selection workflow over a real store
// ABOUTME: Covers idempotence, stored record shape, and persistence across reopen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pantry_server::{
    config::{DatabaseConfig, DatabaseUrl},
    database_plugins::factory::create_store,
    errors::SelectionError,
    services::{validate_selection, PantryService},
};
use serde_json::json;

#[tokio::test]
async fn test_newly_added_names_are_listed_with_unspecified_quantity() {
    let service = PantryService::new(common::create_test_store().await);

    let outcome = service
        .submit(&json!(["CHICKEN", "GARLIC", "ONION", "LEMON"]))
        .await
        .unwrap();

    let stored = service.list_all().await.unwrap();
    for name in &outcome.newly_added {
        let record = stored.iter().find(|i| &i.name == name).unwrap();
        assert_eq!(record.quantity, "N/A");
    }
    assert_eq!(stored.len(), 4);
}

#[tokio::test]
async fn test_same_selection_twice_adds_nothing_second_time() {
    let service = PantryService::new(common::create_test_store().await);
    let payload = json!(["MUTTON", "CARROT", "POTATO"]);

    assert_eq!(service.submit(&payload).await.unwrap().newly_added.len(), 3);
    assert!(service.submit(&payload).await.unwrap().is_empty());
    assert_eq!(service.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_persist_accepts_prevalidated_selection() {
    let service = PantryService::new(common::create_test_store().await);
    let selection = validate_selection(&json!(["EGGS", "PANEER", "BUTTER"])).unwrap();

    let outcome = service.persist(&selection).await.unwrap();
    assert_eq!(outcome.newly_added, selection.into_names());
}

#[tokio::test]
async fn test_too_few_beats_unknown_names() {
    let service = PantryService::new(common::create_test_store().await);

    let result = service.submit(&json!(["SUGAR"])).await;
    assert!(matches!(result, Err(SelectionError::TooFewSelections)));
}

#[tokio::test]
async fn test_records_survive_reopening_file_store() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: dir.path().join("pantry.db"),
        },
        max_connections: 2,
    };

    {
        let service = PantryService::new(create_store(&config).await.unwrap());
        service
            .submit(&json!(["SALT", "WATER", "OIL"]))
            .await
            .unwrap();
    }

    let service = PantryService::new(create_store(&config).await.unwrap());
    let outcome = service
        .submit(&json!(["SALT", "WATER", "OIL", "RICE"]))
        .await
        .unwrap();
    assert_eq!(outcome.newly_added, vec!["RICE"]);
}
