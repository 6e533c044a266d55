use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct TransfersPage;

pub static PAGE: TransfersPage = TransfersPage;

// zawodnik, kierunek, klub, kraj, kwota
impl Page for TransfersPage {
    fn kind(&self) -> ReportKind { ReportKind::Transfers }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { flag_columns: &["kraj"], ..ColumnSpec::PLAIN }
    }

    fn filter_column(&self) -> Option<&'static str> { Some("zawodnik") }
}
