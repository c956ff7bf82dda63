//! Confirmation messages printed after the save prompt.

use std::fmt;

/// How a mutating action's transaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Committed,
    RolledBack,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Committed => writeln!(f, "Changes saved."),
            TransactionStatus::RolledBack => writeln!(f, "Changes rolled back."),
        }
    }
}
