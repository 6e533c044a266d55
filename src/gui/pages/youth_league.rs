use crate::config::options::ReportKind;
use crate::table::ColumnSpec;

use super::Page;

pub struct YouthLeaguePage;

pub static PAGE: YouthLeaguePage = YouthLeaguePage;

impl Page for YouthLeaguePage {
    fn kind(&self) -> ReportKind { ReportKind::YouthLeague }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { score_columns: &["wynik"], ..ColumnSpec::PLAIN }
    }

    fn filter_column(&self) -> Option<&'static str> { Some("przeciwnik") }
}
