#![allow(dead_code)]

use storefront_core::{Action, Database, DatabaseBuilder, Outcome};
use tempfile::TempDir;

/// Helper function to create a fresh database with the schema in place
pub fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("shop.db");
    let mut db = DatabaseBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create database");
    db.ensure_schema().expect("Failed to create schema");
    (temp_dir, db)
}

/// Runs a mutating action in its own transaction and commits it
pub fn commit_action(db: &mut Database, action: Action) -> Outcome {
    let tx = db.transaction().expect("Failed to begin transaction");
    let outcome = action.execute(&tx).expect("Action failed");
    tx.commit().expect("Failed to commit");
    outcome
}

/// Helper function to create a database with every sample row committed
pub fn create_seeded_db() -> (TempDir, Database) {
    let (temp_dir, mut db) = create_test_db();
    for action in [Action::AddProducts, Action::AddCustomers, Action::AddOrders] {
        commit_action(&mut db, action);
    }
    (temp_dir, db)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
