// tests/table_view.rs
//
// TableView decoration, numbering, sorting and filtering without UI.
//
use matchboard::cells;
use matchboard::data::{Cell, DataSet};
use matchboard::flags::FlagTable;
use matchboard::score::Outcome;
use matchboard::table::{ColumnRole, ColumnSpec, SortOrder, TableView};

fn players() -> DataSet {
    DataSet::new(
        vec!["zawodnik".into(), "narodowość".into(), "gole".into()],
        vec![
            vec![Cell::from("Nowak"), Cell::from("Polska"), Cell::Int(4)],
            vec![Cell::from("Müller"), Cell::from("Niemcy"), Cell::Int(11)],
            vec![Cell::from("kowalski"), Cell::from("Marsjanie"), Cell::Int(4)],
            vec![Cell::from("Adamski"), Cell::from("-"), Cell::Int(2)],
        ],
    )
}

const COLUMNS: ColumnSpec = ColumnSpec {
    flag_columns: &["narodowość"],
    score_columns: &["wynik"],
    link_columns: &[],
};

#[test]
fn flag_columns_are_decorated_others_untouched() {
    let v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    assert_eq!(v.roles, vec![ColumnRole::Plain, ColumnRole::Flag, ColumnRole::Plain]);
    assert_eq!(v.rows[0][1].text, "🇵🇱 Polska");
    assert_eq!(v.rows[2][1].text, "Marsjanie");
    assert_eq!(v.rows[0][0].text, "Nowak");
    assert_eq!(v.rows[0][2].text, "4");
}

#[test]
fn score_columns_carry_outcome() {
    let ds = DataSet::new(
        vec!["przeciwnik".into(), "wynik".into()],
        vec![cells!["Legia", "2-1"], cells!["Lech", "0:3"], cells!["Raków", "1-1"], cells!["Widzew", "-"]],
    );
    let v = TableView::from_dataset(&ds, &COLUMNS, &FlagTable::default());
    let outcomes: Vec<Option<Outcome>> = v.rows.iter().map(|r| r[1].outcome).collect();
    assert_eq!(outcomes, vec![Some(Outcome::Win), Some(Outcome::Loss), Some(Outcome::Draw), None]);
    // a plain column never gets an outcome, even if it looks like a score
    let v = TableView::from_dataset(&ds, &ColumnSpec::PLAIN, &FlagTable::default());
    assert!(v.rows.iter().all(|r| r[1].outcome.is_none()));
}

#[test]
fn rows_are_numbered_from_one_after_sorting() {
    let mut v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    v.sort_by(2, SortOrder::Descending);
    let text = v.to_text('\t');
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "#\tzawodnik\tnarodowość\tgole");
    assert!(lines[1].starts_with("1\tMüller\t"));
    assert!(lines[4].starts_with("4\tAdamski\t"));
}

#[test]
fn numeric_sort_is_numeric_and_stable() {
    let mut v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    v.sort_by(2, SortOrder::Ascending);
    let names: Vec<&str> = v.rows.iter().map(|r| r[0].text.as_str()).collect();
    // 2, 4 (Nowak before kowalski: input order kept), 4, 11
    assert_eq!(names, vec!["Adamski", "Nowak", "kowalski", "Müller"]);
}

#[test]
fn text_sort_ignores_case() {
    let mut v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    v.sort_by(0, SortOrder::Ascending);
    let names: Vec<&str> = v.rows.iter().map(|r| r[0].text.as_str()).collect();
    assert_eq!(names, vec!["Adamski", "kowalski", "Müller", "Nowak"]);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let mut v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    v.filter_contains(0, "  SKI ");
    assert_eq!(v.nrows(), 2);
    v.filter_contains(0, "");
    assert_eq!(v.nrows(), 2);
    v.filter_contains(0, "zzz");
    assert!(v.is_empty());
}

#[test]
fn filter_collapses_whitespace_in_query() {
    let ds = DataSet::new(vec!["przeciwnik".into()], vec![cells!["Legia Warszawa"], cells!["Lech Poznań"]]);
    let mut v = TableView::from_dataset(&ds, &ColumnSpec::PLAIN, &FlagTable::default());
    v.filter_contains(0, " legia \t  warszawa ");
    assert_eq!(v.nrows(), 1);
    assert_eq!(v.rows[0][0].text, "Legia Warszawa");
}

#[test]
fn out_of_range_column_is_ignored() {
    let mut v = TableView::from_dataset(&players(), &COLUMNS, &FlagTable::default());
    v.sort_by(9, SortOrder::Ascending);
    v.filter_contains(9, "x");
    assert_eq!(v.nrows(), 4);
    assert_eq!(v.rows[0][0].text, "Nowak");
}

#[test]
fn to_text_tags_results() {
    let ds = DataSet::new(vec!["wynik".into()], vec![cells!["3-0"], cells!["abc"]]);
    let v = TableView::from_dataset(&ds, &COLUMNS, &FlagTable::default());
    assert_eq!(v.to_text(','), "#,wynik\n1,3-0 [W]\n2,abc\n");
}
