use std::error::Error;

use crate::config::options::ReportKind;
use crate::data::DataSet;
use crate::flags::FlagTable;
use crate::stats;
use crate::table::{ColumnSpec, TableView};

use super::{require_column, Page};

pub struct ResultStatsPage;

pub static PAGE: ResultStatsPage = ResultStatsPage;

impl Page for ResultStatsPage {
    fn kind(&self) -> ReportKind { ReportKind::ResultStats }

    /// Win/draw/loss per season plus a total row, from the match history file.
    fn build_view(&self, ds: &DataSet, flags: &FlagTable) -> Result<TableView, Box<dyn Error>> {
        let score = require_column(ds, self.kind(), "wynik")?;
        let season = ds.column("sezon");
        let table = stats::result_statistics(ds, season, score);
        Ok(TableView::from_dataset(&table, &ColumnSpec::PLAIN, flags))
    }
}
