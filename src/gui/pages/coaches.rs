use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct CoachesPage;

pub static PAGE: CoachesPage = CoachesPage;

impl Page for CoachesPage {
    fn kind(&self) -> ReportKind { ReportKind::Coaches }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { flag_columns: &["narodowość"], ..ColumnSpec::PLAIN }
    }
}
