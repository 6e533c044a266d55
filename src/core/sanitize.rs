// src/core/sanitize.rs

use crate::config::consts::ROW_NUMBER_COLUMN;

/// Collapse runs of whitespace to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Column header as used everywhere after loading: trimmed, lower-case.
/// Inner whitespace is kept as-is: " Bramki  Zdobyte " → "bramki  zdobyte".
pub fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Row-number column ("Lp", "Lp.", "L.p.") after normalization.
pub fn is_row_number_column(normalized: &str) -> bool {
    normalized.replace('.', "") == ROW_NUMBER_COLUMN
}

/// Cell is missing when empty or whitespace-only.
#[inline]
pub fn is_missing(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names() {
        assert_eq!(normalize_column(" Wynik "), "wynik");
        assert_eq!(normalize_column("NARODOWOŚĆ"), "narodowość");
        assert_eq!(normalize_column(" Bramki  Zdobyte "), "bramki  zdobyte");
        assert!(is_row_number_column(&normalize_column("Lp.")));
        assert!(is_row_number_column("l.p."));
        assert!(!is_row_number_column("lpg"));
    }

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Legia \t Warszawa\n"), "Legia Warszawa");
    }
}
