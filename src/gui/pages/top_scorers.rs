use crate::config::options::ReportKind;
use crate::table::{ColumnSpec, SortOrder};

use super::Page;

pub struct TopScorersPage;

pub static PAGE: TopScorersPage = TopScorersPage;

impl Page for TopScorersPage {
    fn kind(&self) -> ReportKind { ReportKind::TopScorers }

    fn columns(&self) -> ColumnSpec {
        ColumnSpec { flag_columns: &["narodowość"], ..ColumnSpec::PLAIN }
    }

    fn default_sort(&self) -> Option<(&'static str, SortOrder)> {
        Some(("gole", SortOrder::Descending))
    }
}
