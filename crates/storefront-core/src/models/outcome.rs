//! Results of running a single menu action.

use super::QueryTable;

/// Which table a mutating action touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    ProductsAdded,
    CustomersAdded,
    OrdersAdded,
    SmartphonePricesRaised,
}

/// Number of rows written by a mutating action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSummary {
    pub kind: ChangeKind,
    pub rows: usize,
}

impl ChangeSummary {
    pub fn new(kind: ChangeKind, rows: usize) -> Self {
        Self { kind, rows }
    }
}

/// Output of an action: either rows read or rows written.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Report(QueryTable),
    Changed(ChangeSummary),
}

impl Outcome {
    /// The report table, if this outcome came from a read action.
    pub fn as_report(&self) -> Option<&QueryTable> {
        match self {
            Outcome::Report(table) => Some(table),
            Outcome::Changed(_) => None,
        }
    }

    /// The change summary, if this outcome came from a mutating action.
    pub fn as_change(&self) -> Option<&ChangeSummary> {
        match self {
            Outcome::Changed(summary) => Some(summary),
            Outcome::Report(_) => None,
        }
    }
}

impl From<QueryTable> for Outcome {
    fn from(table: QueryTable) -> Self {
        Outcome::Report(table)
    }
}

impl From<ChangeSummary> for Outcome {
    fn from(summary: ChangeSummary) -> Self {
        Outcome::Changed(summary)
    }
}
