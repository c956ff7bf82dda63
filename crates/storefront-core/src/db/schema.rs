//! Database schema initialization.

use log::{info, warn};

use crate::error::{DatabaseResultExt, Result, StoreError};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

impl super::Database {
    /// Creates the products, customers and orders tables if they are absent.
    ///
    /// All statements run in one transaction: on failure it is rolled back,
    /// so no table from this call survives, and the error is returned.
    pub fn ensure_schema(&mut self) -> Result<()> {
        let tx = self.transaction()?;

        match tx.execute_batch(SCHEMA_SQL) {
            Ok(()) => {
                tx.commit().db_context("Failed to commit schema")?;
                info!("Schema ready at {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                warn!("Schema creation failed, rolling back: {e}");
                tx.rollback()
                    .db_context("Failed to roll back schema creation")?;
                Err(StoreError::database("Failed to create schema").with_source(e))
            }
        }
    }
}
