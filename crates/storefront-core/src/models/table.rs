//! Tabular query results.

use rusqlite::types::Value;

/// Column names and rows returned by a report query.
///
/// Values are kept as SQLite returned them so callers can inspect the
/// numbers before the table is rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryTable {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Check whether the query returned no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Value at `row` in the named column.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|values| values.get(index))
    }

    /// Numeric value at `row` in the named column, widening integers.
    pub fn number(&self, row: usize, column: &str) -> Option<f64> {
        match self.value(row, column)? {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Text value at `row` in the named column.
    pub fn text(&self, row: usize, column: &str) -> Option<&str> {
        match self.value(row, column)? {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
