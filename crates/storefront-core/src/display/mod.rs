//! Display implementations for query results and status messages.
//!
//! Models carry data only; everything the menu prints goes through the
//! [`std::fmt::Display`] impls in this module so the terminal output stays in
//! one place.
//!
//! ## Module Organization
//!
//! - [`table`]: the bordered query result table and value formatting
//! - [`results`]: change summaries and action outcomes
//! - [`status`]: commit/rollback confirmations
//!
//! ```rust
//! use rusqlite::types::Value;
//! use storefront_core::models::QueryTable;
//!
//! let table = QueryTable {
//!     columns: vec!["category".to_string(), "product_count".to_string()],
//!     rows: vec![vec![Value::Text("laptops".to_string()), Value::Integer(2)]],
//! };
//! let output = table.to_string();
//! assert!(output.contains("category | product_count"));
//! assert!(output.contains("laptops | 2"));
//! ```

pub mod results;
pub mod status;
pub mod table;

pub use status::TransactionStatus;
pub use table::format_value;

/// Printed instead of a table when a report returns no rows.
pub const NO_RESULTS_MESSAGE: &str = "Query executed, but no results were returned.";
