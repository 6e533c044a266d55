// src/config/state.rs
use std::collections::HashMap;

use super::options::{AppOptions, ReportKind};
use crate::table::SortOrder;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active entry index into router::PAGES
    pub current_page_index: usize,

    /// Last clicked header per report: (column in view, order)
    pub sort: HashMap<ReportKind, (usize, SortOrder)>,

    /// Text filter per report (player name, opponent, …)
    pub filters: HashMap<ReportKind, String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            sort: HashMap::new(),
            filters: HashMap::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
