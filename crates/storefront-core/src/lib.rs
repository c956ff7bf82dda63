//! Core library for the Storefront shop database demo.
//!
//! This crate owns everything that touches SQLite: opening a freshly
//! recreated database file, creating the products/customers/orders schema,
//! inserting the sample rows, and running the fixed set of reports and the
//! smartphone price update. The menu in `storefront-cli` drives it through
//! the [`Action`] enum.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storefront_core::{Action, DatabaseBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = DatabaseBuilder::new()
//!     .with_database_path(Some("shop.db"))
//!     .build()?;
//! db.ensure_schema()?;
//!
//! // Mutating actions run inside a transaction the caller commits.
//! let tx = db.transaction()?;
//! println!("{}", Action::AddProducts.execute(&tx)?);
//! tx.commit()?;
//!
//! // Reports run directly on the connection.
//! println!("{}", Action::ProductsPerCategory.execute(db.connection())?);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod db;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use actions::{is_affirmative, Action, MenuChoice};
pub use db::{Database, DatabaseBuilder, Table};
pub use display::TransactionStatus;
pub use error::{Result, StoreError};
pub use models::{ChangeKind, ChangeSummary, Outcome, QueryTable};
