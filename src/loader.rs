// src/loader.rs
//
// CSV file → normalized DataSet.
//
// Steps:
//   1. read bytes (missing file → NotFound)
//   2. decode with the UTF-8 → Windows-1250 → Latin-1 cascade
//   3. parse records (header row required, ragged rows tolerated)
//   4. normalize headers (trim + lower-case), drop row-number columns ("Lp.")
//   5. missing cells → placeholder, then infer a type per column

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::decode::decode_cascade;
use crate::core::sanitize::{is_missing, is_row_number_column, normalize_column};
use crate::data::{Cell, DataSet};

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    Decode(PathBuf),
    Csv { path: PathBuf, source: csv::Error },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound(p) | LoadError::Decode(p) => p,
            LoadError::Io { path, .. } | LoadError::Csv { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(p) => write!(f, "File not found: {}", p.display()),
            LoadError::Io { path, source } => write!(f, "Cannot read {}: {}", path.display(), source),
            LoadError::Decode(p) => write!(
                f, "Cannot decode {} as UTF-8, Windows-1250 or Latin-1", p.display()
            ),
            LoadError::Csv { path, source } => write!(f, "Malformed CSV in {}: {}", path.display(), source),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load and normalize one CSV file.
pub fn load_table(path: &Path, placeholder: &str) -> Result<DataSet, LoadError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io { path: path.to_path_buf(), source: e },
    })?;

    let (text, encoding) = decode_cascade(&bytes)
        .ok_or_else(|| LoadError::Decode(path.to_path_buf()))?;
    logd!("Load: {} decoded as {}", path.display(), encoding);

    let ds = parse_table(&text, placeholder)
        .map_err(|e| LoadError::Csv { path: path.to_path_buf(), source: e })?;

    logf!(
        "Load: {} (rows={}, columns={})",
        path.display(), ds.row_count(), ds.header_count()
    );
    Ok(ds)
}

/// Parse already-decoded CSV text. Exposed for callers holding text in memory.
pub fn parse_table(text: &str, placeholder: &str) -> Result<DataSet, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let raw_headers: Vec<String> = rdr.headers()?.iter().map(normalize_column).collect();

    // Source column index for every kept header
    let keep: Vec<usize> = raw_headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !is_row_number_column(h))
        .map(|(i, _)| i)
        .collect();
    let headers: Vec<String> = keep.iter().map(|&i| raw_headers[i].clone()).collect();

    // None = missing
    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if rec.len() > raw_headers.len() {
            logw!(
                "Load: row {} has {} fields, header has {}; extra fields ignored",
                raw_rows.len() + 1, rec.len(), raw_headers.len()
            );
        }
        let row = keep
            .iter()
            .map(|&i| rec.get(i).filter(|v| !is_missing(v)).map(|v| s!(v)))
            .collect();
        raw_rows.push(row);
    }

    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|c| infer_kind(raw_rows.iter().filter_map(|r| r[c].as_deref())))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|r| {
            r.into_iter()
                .zip(&kinds)
                .map(|(v, kind)| match v {
                    None => Cell::Text(s!(placeholder)),
                    Some(v) => kind.cell(v),
                })
                .collect()
        })
        .collect();

    Ok(DataSet::new(headers, rows))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Text,
}

impl ColumnKind {
    fn cell(&self, v: String) -> Cell {
        match self {
            ColumnKind::Int => v.trim().parse().map(Cell::Int).unwrap_or(Cell::Text(v)),
            ColumnKind::Float => v.trim().parse().map(Cell::Float).unwrap_or(Cell::Text(v)),
            ColumnKind::Text => Cell::Text(v),
        }
    }
}

/// Int if every present value is an integer, Float if every one is a
/// number, Text otherwise (including all-missing columns).
fn infer_kind<'a>(values: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind: Option<ColumnKind> = None;
    for v in values {
        let v = v.trim();
        let this = if v.parse::<i64>().is_ok() {
            ColumnKind::Int
        } else if v.bytes().any(|b| b.is_ascii_digit()) && v.parse::<f64>().is_ok() {
            ColumnKind::Float
        } else {
            return ColumnKind::Text;
        };
        kind = Some(match (kind, this) {
            (Some(ColumnKind::Float), _) | (_, ColumnKind::Float) => ColumnKind::Float,
            _ => ColumnKind::Int,
        });
    }
    kind.unwrap_or(ColumnKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_per_column() {
        assert_eq!(infer_kind(["1", " 2 ", "-3"].into_iter()), ColumnKind::Int);
        assert_eq!(infer_kind(["1", "2.5"].into_iter()), ColumnKind::Float);
        assert_eq!(infer_kind(["1", "2-1"].into_iter()), ColumnKind::Text);
        assert_eq!(infer_kind(["inf"].into_iter()), ColumnKind::Text);
        assert_eq!(infer_kind(std::iter::empty()), ColumnKind::Text);
    }

    #[test]
    fn short_rows_are_padded_with_placeholder() {
        let ds = parse_table("a,b,c\n1,2\n", "-").unwrap();
        assert_eq!(ds.rows[0], vec![Cell::Int(1), Cell::Int(2), Cell::Text(s!("-"))]);
    }
}
