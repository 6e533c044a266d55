// src/gui/pages/mod.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::ReportKind,
        state::GuiState },
    data::DataSet,
    flags::FlagTable,
    table::{ColumnSpec, SortOrder, TableView},
};

pub mod current_season;
pub mod player_search;
pub mod match_history;
pub mod top_scorers;
pub mod attendance;
pub mod head_to_head;
pub mod coaches;
pub mod transfers;
pub mod result_stats;
pub mod youth_league;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> ReportKind;

    fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// Flag/score/link columns of the source file.
    fn columns(&self) -> ColumnSpec {
        ColumnSpec::PLAIN
    }

    /// Optional: column the page's search box filters on.
    fn filter_column(&self) -> Option<&'static str> { None }

    /// Optional: order applied until the user clicks a header.
    fn default_sort(&self) -> Option<(&'static str, SortOrder)> { None }

    /// Draw page-specific controls above the table. Returns true when the
    /// view needs rebuilding.
    fn draw_controls(&self, ui: &mut egui::Ui, gui: &mut GuiState) -> bool {
        let Some(col) = self.filter_column() else { return false };
        let query = gui.filters.entry(self.kind()).or_default();
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(format!("Search ({col}):"));
            changed |= ui.text_edit_singleline(query).changed();
            if !query.is_empty() && ui.small_button("✖").clicked() {
                query.clear();
                changed = true;
            }
        });
        changed
    }

    /// Shape the loaded file into the table shown for this page.
    /// Default: the file as-is with this page's column decorations.
    fn build_view(&self, ds: &DataSet, flags: &FlagTable) -> Result<TableView, Box<dyn Error>> {
        Ok(TableView::from_dataset(ds, &self.columns(), flags))
    }
}

/// Full pipeline for one page: build, apply the search filter, then sort
/// (user choice first, page default otherwise).
pub fn render_view(
    page: &dyn Page,
    ds: &DataSet,
    gui: &GuiState,
    flags: &FlagTable,
) -> Result<TableView, Box<dyn Error>> {
    let mut view = page.build_view(ds, flags)?;
    let kind = page.kind();

    if let (Some(col), Some(query)) = (page.filter_column(), gui.filters.get(&kind)) {
        match view.column(col) {
            Some(ix) => view.filter_contains(ix, query),
            None => logw!("View: {:?} has no '{}' column to filter on", kind, col),
        }
    }

    let sort = gui.sort.get(&kind).copied().or_else(|| {
        page.default_sort()
            .and_then(|(name, order)| view.column(name).map(|ix| (ix, order)))
    });
    if let Some((ix, order)) = sort {
        view.sort_by(ix, order);
    }

    Ok(view)
}

/// Column index or a readable error naming the report's file.
pub(crate) fn require_column(ds: &DataSet, kind: ReportKind, name: &str) -> Result<usize, Box<dyn Error>> {
    ds.column(name).ok_or_else(|| {
        format!("Column '{}' not found in {}", name, kind.source_file()).into()
    })
}
