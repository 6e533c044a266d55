use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct MatchHistoryPage;

pub static PAGE: MatchHistoryPage = MatchHistoryPage;

// sezon, data, rozgrywki, przeciwnik, wynik
impl Page for MatchHistoryPage {
    fn kind(&self) -> ReportKind { ReportKind::MatchHistory }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { score_columns: &["wynik"], ..ColumnSpec::PLAIN }
    }

    fn filter_column(&self) -> Option<&'static str> { Some("przeciwnik") }
}
