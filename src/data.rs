// src/data.rs
//
// Canonical in-memory table shapes.
//
// - Cell:    one typed CSV value (text, integer or float).
// - DataSet: normalized headers + rows as produced by the loader,
//            or by the derived reports in `stats`.
//
// Display concerns (flags, result colors, row numbers, sorting) live in
// `table::TableView`, which is built from a DataSet and never mutates it.

use std::cmp::Ordering;
use std::fmt;

/// A single CSV value after per-column type inference.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value for sorting/aggregation, if the cell is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// Ordering used by sortable tables: numbers before text, numbers
    /// numerically, text case-insensitively.
    pub fn sort_cmp(&self, other: &Cell) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => {
                let a = self.to_string().to_lowercase();
                let b = other.to_string().to_lowercase();
                a.cmp(&b)
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s!(s)) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Cell::Text(s) }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self { Cell::Int(v) }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self { Cell::Float(v) }
}

/// Headers + rows. Every row has exactly `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of a (normalized) column name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate the cells of one column.
    pub fn column_cells(&self, ix: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |r| r.get(ix))
    }
}
