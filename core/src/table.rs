//! Fixed-shape tabular output shared by every report.
//!
//! The rendering/export side only ever sees a header list and rows of
//! typed cells; it never needs to know which analyzer produced them.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Object, Rows},
        Alignment, Style,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Decimal(f64),
    Date(NaiveDate),
}

impl Cell {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Decimal(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Decimal(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Decimal(v) => write!(f, "{v:.2}"),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<u32> for Cell {
    fn from(v: u32) -> Self {
        Cell::Int(i64::from(v))
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Decimal(v)
    }
}

impl From<NaiveDate> for Cell {
    fn from(d: NaiveDate) -> Self {
        Cell::Date(d)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub name: String,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(name: &str, title: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Every row has exactly one cell per header.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.headers.len(),
            "row width does not match headers of '{}'",
            self.name
        );
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of the column titled `header`.
    pub fn column(&self, header: &str) -> Option<Vec<&Cell>> {
        let idx = self.headers.iter().position(|h| h == header)?;
        Some(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Markdown-style rendering under the title; numeric columns are
    /// right-aligned.
    pub fn render_text(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().map(String::as_str));
        for row in &self.rows {
            builder.push_record(row.iter().map(ToString::to_string));
        }

        let mut table = builder.build();
        table.with(Style::markdown());
        for idx in (0..self.headers.len()).filter(|&i| self.is_numeric_column(i)) {
            table.modify(Columns::new(idx..idx + 1).not(Rows::first()), Alignment::right());
        }
        format!("{}\n{table}\n", self.title)
    }

    fn is_numeric_column(&self, idx: usize) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r[idx].is_numeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_render_with_two_places() {
        assert_eq!(Cell::from(33.3).to_string(), "33.30");
        assert_eq!(Cell::from(7u32).to_string(), "7");
    }

    #[test]
    fn cells_serialize_untagged() {
        let row = vec![Cell::from("Clerk"), Cell::from(2i64), Cell::from(12.5)];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["Clerk",2,12.5]"#);
    }

    #[test]
    fn text_rendering_aligns_columns() {
        let mut t = ReportTable::new("t", "Title", &["Name", "Count"]);
        t.push_row(vec!["Clerk".into(), 12i64.into()]);
        t.push_row(vec!["Analyst".into(), 3i64.into()]);
        let text = t.render_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title",
                "| Name    | Count |",
                "|---------|-------|",
                "| Clerk   |    12 |",
                "| Analyst |     3 |",
            ]
        );
    }

    #[test]
    fn mixed_columns_stay_left_aligned() {
        let mut t = ReportTable::new("t", "Title", &["Value"]);
        t.push_row(vec![Cell::from(7i64)]);
        t.push_row(vec![Cell::from("seven")]);
        let text = t.render_text();
        assert!(text.lines().any(|l| l == "| 7     |"));
    }

    #[test]
    fn empty_table_renders_headers_only() {
        let t = ReportTable::new("t", "Title", &["A", "B"]);
        assert_eq!(t.render_text().lines().count(), 3);
    }

    #[test]
    #[should_panic(expected = "row width")]
    fn ragged_rows_are_rejected() {
        let mut t = ReportTable::new("t", "Title", &["A", "B"]);
        t.push_row(vec![Cell::from("only one")]);
    }
}
