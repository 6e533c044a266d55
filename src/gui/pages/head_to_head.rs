use std::error::Error;

use crate::config::options::ReportKind;
use crate::data::DataSet;
use crate::flags::FlagTable;
use crate::stats;
use crate::table::{ColumnSpec, TableView};

use super::{require_column, Page};

pub struct HeadToHeadPage;

pub static PAGE: HeadToHeadPage = HeadToHeadPage;

impl Page for HeadToHeadPage {
    fn kind(&self) -> ReportKind { ReportKind::HeadToHead }

    fn filter_column(&self) -> Option<&'static str> { Some("przeciwnik") }

    /// One row per opponent, derived from the match history file.
    fn build_view(&self, ds: &DataSet, flags: &FlagTable) -> Result<TableView, Box<dyn Error>> {
        let opp = require_column(ds, self.kind(), "przeciwnik")?;
        let score = require_column(ds, self.kind(), "wynik")?;
        let table = stats::head_to_head(ds, opp, score);
        Ok(TableView::from_dataset(&table, &ColumnSpec::PLAIN, flags))
    }
}
