//! Bordered text rendering for query tables.

use std::fmt;

use rusqlite::types::Value;

use crate::models::QueryTable;

const TABLE_HEADER: &str = "--- Query Results ---";
const TABLE_FOOTER: &str = "---------------------";
const COLUMN_SEPARATOR: &str = " | ";

/// Formats one SQLite value for a table cell.
///
/// Whole reals keep a trailing `.0` so they read as decimals.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Real(r) if r.is_finite() && r.fract() == 0.0 => format!("{r:.1}"),
        Value::Real(r) => r.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}

impl fmt::Display for QueryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TABLE_HEADER}")?;
        writeln!(f, "{}", self.columns.join(COLUMN_SEPARATOR))?;

        let rule_width: usize = self.columns.iter().map(String::len).sum::<usize>()
            + self.columns.len() * COLUMN_SEPARATOR.len();
        writeln!(f, "{}", "-".repeat(rule_width))?;

        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(format_value).collect();
            writeln!(f, "{}", cells.join(COLUMN_SEPARATOR))?;
        }

        writeln!(f, "{TABLE_FOOTER}")
    }
}
