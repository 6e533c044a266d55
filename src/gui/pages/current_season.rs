use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct CurrentSeasonPage;

pub static PAGE: CurrentSeasonPage = CurrentSeasonPage;

impl Page for CurrentSeasonPage {
    fn kind(&self) -> ReportKind { ReportKind::CurrentSeason }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { score_columns: &["wynik"], ..ColumnSpec::PLAIN }
    }
}
