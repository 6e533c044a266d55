// src/flags.rs
//
// Country name → "<flag> <name>" decoration.
//
// Lookup is exact first, then the first entry (in table order) whose name
// occurs inside the input, so "Polska (gościnnie)" still gets the Polish
// flag. Longer names that contain a shorter one ("Irlandia Północna" vs
// "Irlandia") must come first in the table.

/// Immutable name → glyph table. Cheap to share by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagTable {
    entries: Vec<(String, String)>,
}

// England, Scotland and Wales are tag sequences, not regional-indicator pairs.
const ENGLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
const SCOTLAND: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
const WALES: &str = "\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}";

static DEFAULT_FLAGS: &[(&str, &str)] = &[
    ("Polska", "🇵🇱"),
    ("Niemcy", "🇩🇪"),
    ("Czechy", "🇨🇿"),
    ("Słowacja", "🇸🇰"),
    ("Ukraina", "🇺🇦"),
    ("Litwa", "🇱🇹"),
    ("Łotwa", "🇱🇻"),
    ("Estonia", "🇪🇪"),
    ("Białoruś", "🇧🇾"),
    ("Rosja", "🇷🇺"),
    ("Węgry", "🇭🇺"),
    ("Rumunia", "🇷🇴"),
    ("Bułgaria", "🇧🇬"),
    ("Serbia", "🇷🇸"),
    ("Chorwacja", "🇭🇷"),
    ("Słowenia", "🇸🇮"),
    ("Bośnia i Hercegowina", "🇧🇦"),
    ("Czarnogóra", "🇲🇪"),
    ("Macedonia Północna", "🇲🇰"),
    ("Albania", "🇦🇱"),
    ("Kosowo", "🇽🇰"),
    ("Grecja", "🇬🇷"),
    ("Turcja", "🇹🇷"),
    ("Gruzja", "🇬🇪"),
    ("Austria", "🇦🇹"),
    ("Szwajcaria", "🇨🇭"),
    ("Włochy", "🇮🇹"),
    ("Hiszpania", "🇪🇸"),
    ("Portugalia", "🇵🇹"),
    ("Francja", "🇫🇷"),
    ("Belgia", "🇧🇪"),
    ("Holandia", "🇳🇱"),
    ("Anglia", ENGLAND),
    ("Szkocja", SCOTLAND),
    ("Walia", WALES),
    ("Irlandia Północna", "🇬🇧"),
    ("Irlandia", "🇮🇪"),
    ("Islandia", "🇮🇸"),
    ("Dania", "🇩🇰"),
    ("Szwecja", "🇸🇪"),
    ("Norwegia", "🇳🇴"),
    ("Finlandia", "🇫🇮"),
    ("Izrael", "🇮🇱"),
    ("Brazylia", "🇧🇷"),
    ("Argentyna", "🇦🇷"),
    ("Urugwaj", "🇺🇾"),
    ("Kolumbia", "🇨🇴"),
    ("USA", "🇺🇸"),
    ("Kanada", "🇨🇦"),
    ("Nigeria", "🇳🇬"),
    ("Ghana", "🇬🇭"),
    ("Senegal", "🇸🇳"),
    ("Kamerun", "🇨🇲"),
    ("Japonia", "🇯🇵"),
];

impl Default for FlagTable {
    fn default() -> Self {
        Self::new(DEFAULT_FLAGS.iter().map(|&(name, glyph)| (name, glyph)))
    }
}

impl FlagTable {
    /// Build a table from (name, glyph) pairs. Order is kept and decides
    /// which entry wins a substring match.
    pub fn new<I, N, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, G)>,
        N: Into<String>,
        G: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(n, g)| (n.into(), g.into())).collect(),
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Glyph for `name`: exact match, else first contained name.
    pub fn glyph_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .or_else(|| self.entries.iter().find(|(n, _)| !n.is_empty() && name.contains(n.as_str())))
            .map(|(_, g)| g.as_str())
    }

    /// "<glyph> <name>", or `name` unchanged when nothing matches.
    pub fn decorate(&self, name: &str) -> String {
        match self.glyph_for(name) {
            Some(glyph) => format!("{glyph} {name}"),
            None => s!(name),
        }
    }
}
