//! Builder for opening a freshly recreated database.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Database;
use crate::error::{Result, StoreError};

/// Database file used when no path is configured.
pub const DEFAULT_DATABASE_FILE: &str = "shop.db";

/// Builder for creating and configuring [`Database`] instances.
///
/// Every build starts from an empty file: a database left over from an
/// earlier run is deleted before the connection is opened.
#[derive(Debug, Clone)]
pub struct DatabaseBuilder {
    database_path: Option<PathBuf>,
}

impl DatabaseBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses `shop.db` in the current working directory.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// The path the database will be created at.
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE))
    }

    /// Deletes any existing file and opens a new connection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Configuration` if the path is empty or a directory
    /// Returns `StoreError::FileSystem` if the old file cannot be removed
    /// Returns `StoreError::Database` if the connection cannot be opened
    pub fn build(self) -> Result<Database> {
        let db_path = self.database_path();
        validate_database_path(&db_path)?;

        let replaced_existing = remove_existing(&db_path)?;
        if replaced_existing {
            info!("Removed old database file {}", db_path.display());
        }

        let mut db = Database::open(&db_path)?;
        db.replaced_existing = replaced_existing;
        Ok(db)
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_database_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(StoreError::Configuration {
            message: "database path is empty".to_string(),
        });
    }
    if path.is_dir() {
        return Err(StoreError::Configuration {
            message: format!("database path '{}' is a directory", path.display()),
        });
    }
    Ok(())
}

fn remove_existing(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| StoreError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(true)
}
