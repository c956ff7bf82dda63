//! Database connection handling for the shop schema.
//!
//! [`Database`] owns the single SQLite connection used for the lifetime of
//! the program. Operations in [`seed`] and [`reports`] take a plain
//! `&Connection`, so they run the same way on the connection directly
//! (autocommit) or inside a [`Transaction`] opened by the caller.

use std::path::{Path, PathBuf};

use log::debug;
use rusqlite::{Connection, Transaction};

use crate::error::{DatabaseResultExt, Result};

pub mod builder;
pub mod reports;
pub mod schema;
pub mod seed;

pub use builder::DatabaseBuilder;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
    path: PathBuf,
    replaced_existing: bool,
}

impl Database {
    /// Opens a connection to the database file with foreign keys enforced.
    ///
    /// The schema is not created here; call [`Database::ensure_schema`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).db_context("Failed to open database connection")?;

        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        debug!("Opened database at {}", path.display());

        Ok(Self {
            connection,
            path,
            replaced_existing: false,
        })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a database file from an earlier run was deleted before opening.
    pub fn replaced_existing(&self) -> bool {
        self.replaced_existing
    }

    /// Shared connection for read-only work in autocommit mode.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Begins a transaction for a mutating action.
    ///
    /// Dropping the returned transaction without committing rolls it back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        self.connection
            .transaction()
            .db_context("Failed to begin transaction")
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.connection
            .close()
            .map_err(|(_, e)| e)
            .db_context("Failed to close database connection")?;
        debug!("Closed database at {}", path.display());
        Ok(())
    }

    /// Number of rows in one of the shop tables.
    pub fn row_count(&self, table: Table) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.as_str());
        self.connection
            .query_row(&sql, [], |row| row.get(0))
            .db_context("Failed to count rows")
    }
}

/// The tables created by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Products,
    Customers,
    Orders,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Products => "products",
            Table::Customers => "customers",
            Table::Orders => "orders",
        }
    }
}
