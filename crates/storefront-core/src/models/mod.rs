//! Data models for the shop database.
//!
//! Row types describe what the seed module writes; [`QueryTable`] carries
//! what the report module reads back; [`Outcome`] is the result of running
//! one menu action.

pub mod catalog;
pub mod outcome;
pub mod table;

pub use catalog::{NewCustomer, NewOrder, NewProduct};
pub use outcome::{ChangeKind, ChangeSummary, Outcome};
pub use table::QueryTable;
