//! Display for action outcomes.

use std::fmt;

use super::NO_RESULTS_MESSAGE;
use crate::models::{ChangeKind, ChangeSummary, Outcome};

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows;
        match self.kind {
            ChangeKind::ProductsAdded => writeln!(f, "{rows} products added."),
            ChangeKind::CustomersAdded => writeln!(f, "{rows} customers added."),
            ChangeKind::OrdersAdded => writeln!(f, "{rows} orders added."),
            ChangeKind::SmartphonePricesRaised => {
                writeln!(f, "{rows} smartphone prices updated by 10%.")
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Report(table) if table.is_empty() => writeln!(f, "{NO_RESULTS_MESSAGE}"),
            Outcome::Report(table) => {
                writeln!(f)?;
                write!(f, "{table}")?;
                writeln!(f)
            }
            Outcome::Changed(summary) => write!(f, "{summary}"),
        }
    }
}
