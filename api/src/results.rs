//! Query rows → a string table for display.
//!
//! Columns come from the first row's keys, in the order the server sent
//! them. Later rows are read against that fixed column set: a missing key
//! shows `undefined` and keys the first row lacks are not shown.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use serde_json::Value;

use crate::model::QueryRow;

/// Placeholder for an empty result set.
pub const NO_RESULTS: &str = "No results found.";

/// Cell text for a column the row does not carry.
pub const UNDEFINED_CELL: &str = "undefined";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Table(ResultTable),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    /// `"Showing <n> rows"`.
    #[must_use]
    pub fn footer(&self) -> String {
        format!("Showing {} rows", self.rows.len())
    }
}

#[must_use]
pub fn render(rows: &[QueryRow]) -> ResultsView {
    let Some(first) = rows.first() else {
        return ResultsView::Empty;
    };
    let columns: Vec<String> = first.keys().cloned().collect();
    let rows = rows
        .iter()
        .map(|row| columns.iter().map(|column| cell_text(row.get(column))).collect())
        .collect();
    ResultsView::Table(ResultTable { columns, rows })
}

/// String form of one cell. Never fails.
#[must_use]
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED_CELL.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
    }
}
