// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    cache::LoadCache,
    config::{
        consts::SIDEBAR_W,
        options::ReportKind,
        state::AppState },
    data::DataSet,
    flags::FlagTable,
    table::{SortOrder, TableView},
};

use super::{
    pages::{self, Page},
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Matchboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // explicit file cache; invalidated by "Reload"
    pub cache: LoadCache,
    pub flags: FlagTable,

    // loaded file for the CURRENT page (None = not loaded)
    pub source: Option<Arc<DataSet>>,

    // display table for the CURRENT page
    pub view: TableView,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = LoadCache::new(&state.options.data.placeholder);
        let mut app = Self {
            state,
            cache,
            flags: FlagTable::default(),
            source: None,
            view: TableView::empty(),
            status: s!("Idle"),
        };

        logf!(
            "Init: data dir={}, default page={:?}",
            app.state.options.data.data_dir().display(),
            app.current_page_kind()
        );
        app.load_current();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> ReportKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Menu click → switch page and load its file.
    pub fn switch_to(&mut self, idx: usize) {
        if idx == self.current_index() || idx >= router::all_pages().len() {
            return;
        }
        let prev = self.current_page_kind();
        self.set_current_index(idx);
        logf!("UI: Page switch {:?} → {:?}", prev, self.current_page_kind());
        self.load_current();
    }

    /// Load (or fetch from cache) the current page's file, then rebuild the view.
    /// A failed load leaves the page without a table and the reason in the status line.
    pub fn load_current(&mut self) {
        let kind = self.current_page_kind();
        let path = self.state.options.data.path_for(kind);

        match self.cache.get_or_load(&path) {
            Ok(ds) => {
                self.source = Some(ds);
                self.rebuild_view();
            }
            Err(e) => {
                loge!("Load: {:?} failed: {}", kind, e);
                self.source = None;
                self.view = TableView::empty();
                self.status(e.to_string());
            }
        }
    }

    /// Drop the cached copy and read the file again.
    pub fn reload_current(&mut self) {
        let path = self.state.options.data.path_for(self.current_page_kind());
        self.cache.invalidate(&path);
        self.load_current();
    }

    /// Rebuild the display table from the loaded file + current filters/sort.
    pub fn rebuild_view(&mut self) {
        let Some(ds) = self.source.clone() else { return };
        let page = self.current_page();

        match pages::render_view(page, &ds, &self.state.gui, &self.flags) {
            Ok(view) => {
                let msg = if view.nrows() == ds.row_count() || page.filter_column().is_none() {
                    format!("{}: {} row(s)", page.label(), view.nrows())
                } else {
                    format!("{}: {} of {} row(s)", page.label(), view.nrows(), ds.row_count())
                };
                self.view = view;
                self.status(msg);
            }
            Err(e) => {
                loge!("View: {:?} failed: {}", page.kind(), e);
                self.view = TableView::empty();
                self.status(e.to_string());
            }
        }
    }

    /// Header click: same column flips the order, a new column starts ascending.
    pub fn toggle_sort(&mut self, col: usize) {
        let kind = self.current_page_kind();
        let next = match self.state.gui.sort.get(&kind) {
            Some(&(c, order)) if c == col => (col, order.flip()),
            _ => (col, SortOrder::Ascending),
        };
        logd!("UI: Sort {:?} by column {} {:?}", kind, next.0, next.1);
        self.state.gui.sort.insert(kind, next);
        self.rebuild_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("reports")
            .resizable(false)
            .exact_width(SIDEBAR_W)
            .show(ctx, |ui| {
                crate::gui::components::menu::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::toolbar::draw(ui, self);

            ui.separator();

            if self.source.is_some() {
                crate::gui::components::data_table::draw(ui, self);
            }
        });
    }
}
