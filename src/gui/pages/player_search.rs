use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct PlayerSearchPage;

pub static PAGE: PlayerSearchPage = PlayerSearchPage;

// zawodnik, pozycja, narodowość, flaga (URL), mecze, gole
impl Page for PlayerSearchPage {
    fn kind(&self) -> ReportKind { ReportKind::PlayerSearch }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec {
            flag_columns: &["narodowość"],
            link_columns: &["flaga"],
            ..ColumnSpec::PLAIN
        }
    }

    fn filter_column(&self) -> Option<&'static str> { Some("zawodnik") }
}
