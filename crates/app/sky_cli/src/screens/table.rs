//! Plain-text tables.

use std::fmt;

use serde_json::Value;
use sky_core::format::{format_currency, format_date, number_from_json};

/// Left-aligned text table with a header row and a rule under it.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.extend(std::iter::repeat_n(' ', width - cell.chars().count()));
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(f, &rule, &widths)?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Display text for a JSON field; `-` when absent or null.
pub fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "yes".to_string(),
        Some(Value::Bool(false)) => "no".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Display text for `record[key]`.
pub fn field(record: &Value, key: &str) -> String {
    text(record.get(key))
}

/// Display text for `record[outer][inner]`.
pub fn nested(record: &Value, outer: &str, inner: &str) -> String {
    text(record.get(outer).and_then(|v| v.get(inner)))
}

/// Amount as `MZN 1.234,56`; `-` when absent or not numeric.
pub fn money(value: Option<&Value>) -> String {
    value
        .and_then(number_from_json)
        .map(format_currency)
        .unwrap_or_else(|| "-".into())
}

/// Timestamp as `dd/mm/yyyy, HH:MM`; `-` when absent.
pub fn date(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(raw) => format_date(raw),
        None => "-".into(),
    }
}

/// Two-column key/value listing of an object's scalar fields.
pub fn details(record: &Value) -> Table {
    let mut table = Table::new(["field", "value"]);
    if let Some(map) = record.as_object() {
        for (key, value) in map {
            if value.is_object() || value.is_array() {
                continue;
            }
            table.row([key.clone(), text(Some(value))]);
        }
    }
    table
}
