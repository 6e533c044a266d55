// tests/flags.rs
//
// Country → flag decoration, with the built-in and injected tables.
//
use matchboard::flags::FlagTable;

#[test]
fn exact_match_gets_flag() {
    let t = FlagTable::default();
    assert_eq!(t.decorate("Polska"), "🇵🇱 Polska");
    assert_eq!(t.decorate("Niemcy"), "🇩🇪 Niemcy");
}

#[test]
fn substring_match_keeps_full_input() {
    let t = FlagTable::default();
    assert_eq!(t.decorate("Polska (gościnnie)"), "🇵🇱 Polska (gościnnie)");
}

#[test]
fn unknown_country_is_unchanged() {
    let t = FlagTable::default();
    assert_eq!(t.decorate("Marsjanie"), "Marsjanie");
    assert_eq!(t.decorate(""), "");
}

#[test]
fn longer_names_win_over_contained_ones() {
    let t = FlagTable::default();
    assert_eq!(t.glyph_for("Irlandia Północna"), Some("🇬🇧"));
    assert_eq!(t.glyph_for("Irlandia"), Some("🇮🇪"));
}

#[test]
fn injected_table_order_breaks_ties() {
    let a_first = FlagTable::new([("Kraj", "A"), ("Kraj B", "B")]);
    let b_first = FlagTable::new([("Kraj B", "B"), ("Kraj", "A")]);
    // no exact match → first contained key in table order
    assert_eq!(a_first.decorate("Kraj B/C"), "A Kraj B/C");
    assert_eq!(b_first.decorate("Kraj B/C"), "B Kraj B/C");
    // exact match beats an earlier substring entry
    assert_eq!(a_first.decorate("Kraj B"), "B Kraj B");
}

#[test]
fn empty_table_decorates_nothing() {
    let t = FlagTable::new(Vec::<(String, String)>::new());
    assert!(t.is_empty());
    assert_eq!(t.decorate("Polska"), "Polska");
}
