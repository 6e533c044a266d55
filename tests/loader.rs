// tests/loader.rs
//
// CSV loading: encoding cascade, header normalization, placeholders, errors.
//
use std::fs;
use std::path::PathBuf;

use matchboard::data::Cell;
use matchboard::loader::{load_table, parse_table, LoadError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("matchboard_loader_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn text(s: &str) -> Cell { Cell::Text(s.to_string()) }

#[test]
fn headers_are_normalized_and_row_number_dropped() {
    let dir = tmp_dir("headers");
    let path = dir.join("mecze.csv");
    fs::write(&path, "Lp., Data ,Przeciwnik, Wynik \n1,2024-08-01,Legia,2-1\n2,2024-08-08,Lech,0:0\n").unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.headers, vec!["data", "przeciwnik", "wynik"]);
    assert_eq!(ds.rows.len(), 2);
    assert_eq!(ds.rows[0], vec![text("2024-08-01"), text("Legia"), text("2-1")]);
}

#[test]
fn inner_header_whitespace_is_kept() {
    let ds = parse_table(" Bramki  Zdobyte \n1\n", "-").unwrap();
    assert_eq!(ds.headers, vec!["bramki  zdobyte"]);
    assert_eq!(ds.column("bramki zdobyte"), None);
}

#[test]
fn missing_cells_become_placeholder() {
    let dir = tmp_dir("missing");
    let path = dir.join("zawodnicy.csv");
    fs::write(&path, "zawodnik,narodowość,gole\nKowalski,,3\nNowak,Polska,\n").unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.rows[0][1], text("-"));
    assert_eq!(ds.rows[1][2], text("-"));
    // present values in a numeric column stay numeric
    assert_eq!(ds.rows[0][2], Cell::Int(3));
}

#[test]
fn numeric_columns_are_typed() {
    let dir = tmp_dir("types");
    let path = dir.join("frekwencja.csv");
    fs::write(&path, "sezon,widzów,średnia\n2023/24,120000,7058.8\n2022/23,98000,5764\n").unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.rows[0][0], text("2023/24"));
    assert_eq!(ds.rows[0][1], Cell::Int(120000));
    assert_eq!(ds.rows[0][2], Cell::Float(7058.8));
    assert_eq!(ds.rows[1][2], Cell::Float(5764.0));
}

#[test]
fn windows_1250_file_is_decoded() {
    let dir = tmp_dir("cp1250");
    let path = dir.join("trenerzy.csv");
    // "trener,narodowość\nŁukasz,Polska\n" in Windows-1250
    let mut bytes = b"trener,narodowo\x9C\xE6\n".to_vec();
    bytes.extend_from_slice(b"\xA3ukasz,Polska\n");
    fs::write(&path, bytes).unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.headers, vec!["trener", "narodowość"]);
    assert_eq!(ds.rows[0][0], text("Łukasz"));
}

#[test]
fn utf8_bom_does_not_leak_into_first_header() {
    let dir = tmp_dir("bom");
    let path = dir.join("sezon.csv");
    fs::write(&path, "\u{feff}Lp,Wynik\n1,1-0\n").unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.headers, vec!["wynik"]);
}

#[test]
fn missing_file_is_reported_with_its_name() {
    let dir = tmp_dir("notfound");
    let path = dir.join("brak.csv");

    let err = load_table(&path, "-").unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("brak.csv"));
}

#[test]
fn header_only_file_loads_empty() {
    let dir = tmp_dir("empty");
    let path = dir.join("transfery.csv");
    fs::write(&path, "Zawodnik,Kraj\n").unwrap();

    let ds = load_table(&path, "-").unwrap();
    assert_eq!(ds.headers, vec!["zawodnik", "kraj"]);
    assert!(ds.is_empty());
}
