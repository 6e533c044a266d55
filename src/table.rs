// src/table.rs
//! TableView: display-ready projection of a `DataSet`.
//!
//! - Decorates flag columns through an injected `FlagTable`.
//! - Classifies score columns so the renderer can color them.
//! - Numbers rows from 1 in the current (filtered, sorted) order.
//!
//! The source `DataSet` is never touched; every view is rebuilt from it.

use crate::config::consts::INDEX_HEADER;
use crate::core::sanitize::normalize_ws;
use crate::data::{Cell, DataSet};
use crate::flags::FlagTable;
use crate::score::{self, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "⬆",
            SortOrder::Descending => "⬇",
        }
    }
}

/// Which (normalized) columns get special treatment on a page.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnSpec {
    pub flag_columns: &'static [&'static str],
    pub score_columns: &'static [&'static str],
    /// Columns holding flag/image URLs; rendered as links.
    pub link_columns: &'static [&'static str],
}

impl ColumnSpec {
    pub const PLAIN: ColumnSpec = ColumnSpec {
        flag_columns: &[],
        score_columns: &[],
        link_columns: &[],
    };

    pub fn role_of(&self, header: &str) -> ColumnRole {
        if self.score_columns.contains(&header) {
            ColumnRole::Score
        } else if self.flag_columns.contains(&header) {
            ColumnRole::Flag
        } else if self.link_columns.contains(&header) {
            ColumnRole::Link
        } else {
            ColumnRole::Plain
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    Plain,
    Flag,
    Score,
    Link,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewCell {
    /// Source value, used for sorting.
    pub value: Cell,
    /// What the user sees.
    pub text: String,
    /// Set only for parseable cells in score columns.
    pub outcome: Option<Outcome>,
}

impl ViewCell {
    fn build(value: &Cell, role: ColumnRole, flags: &FlagTable) -> Self {
        let (text, outcome) = match role {
            ColumnRole::Flag => match value.as_text() {
                Some(name) => (flags.decorate(name), None),
                None => (value.to_string(), None),
            },
            ColumnRole::Score => (value.to_string(), score::classify(value)),
            ColumnRole::Plain | ColumnRole::Link => (value.to_string(), None),
        };
        Self { value: value.clone(), text, outcome }
    }

    pub fn is_numeric(&self) -> bool {
        self.value.as_f64().is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TableView {
    pub headers: Vec<String>,
    pub roles: Vec<ColumnRole>,
    pub rows: Vec<Vec<ViewCell>>,
}

impl TableView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_dataset(ds: &DataSet, spec: &ColumnSpec, flags: &FlagTable) -> Self {
        let roles: Vec<ColumnRole> = ds.headers.iter().map(|h| spec.role_of(h)).collect();
        let rows = ds
            .rows
            .iter()
            .map(|r| {
                r.iter()
                    .zip(&roles)
                    .map(|(cell, role)| ViewCell::build(cell, *role, flags))
                    .collect()
            })
            .collect();
        Self { headers: ds.headers.clone(), roles, rows }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn ncols(&self) -> usize { self.headers.len() }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 1-based row number as displayed in the index column.
    #[inline]
    pub fn row_number(&self, row: usize) -> usize { row + 1 }

    /// Index header followed by the data headers.
    pub fn display_headers(&self) -> Vec<String> {
        std::iter::once(s!(INDEX_HEADER))
            .chain(self.headers.iter().cloned())
            .collect()
    }

    /// Stable sort on one data column.
    pub fn sort_by(&mut self, col: usize, order: SortOrder) {
        if col >= self.ncols() {
            return;
        }
        self.rows.sort_by(|a, b| {
            let ord = a[col].value.sort_cmp(&b[col].value);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    /// Keep rows whose `col` text contains `needle`, ignoring case.
    /// Runs of whitespace in the needle count as one space.
    /// Blank needle keeps everything.
    pub fn filter_contains(&mut self, col: usize, needle: &str) {
        let needle = normalize_ws(needle).to_lowercase();
        if needle.is_empty() || col >= self.ncols() {
            return;
        }
        self.rows.retain(|r| r[col].text.to_lowercase().contains(&needle));
    }

    /// Plain-text rendering with row numbers; result cells get a W/D/L tag.
    pub fn to_text(&self, sep: char) -> String {
        let mut out = String::new();
        push_line(&mut out, self.display_headers().iter().map(String::as_str), sep);
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = std::iter::once(self.row_number(i).to_string())
                .chain(row.iter().map(|c| match c.outcome {
                    Some(o) => format!("{} [{}]", c.text, o.letter()),
                    None => c.text.clone(),
                }))
                .collect();
            push_line(&mut out, cells.iter().map(String::as_str), sep);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, sep: char) {
    let mut first = true;
    for c in cells {
        if !first { out.push(sep); } else { first = false; }
        out.push_str(c);
    }
    out.push('\n');
}
