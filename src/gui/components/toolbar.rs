// src/gui/components/toolbar.rs
//
// Page heading, page-specific controls, reload button and status line.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    ui.horizontal(|ui| {
        ui.heading(page.label());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Reload").on_hover_text("Read the file again").clicked() {
                logf!("UI: Reload {:?}", page.kind());
                app.reload_current();
            }
            ui.weak(page.kind().source_file());
        });
    });

    // Page-specific controls
    if app.source.is_some() && page.draw_controls(ui, &mut app.state.gui) {
        app.rebuild_view();
    }

    let text = RichText::new(&app.status).small();
    if app.source.is_none() {
        ui.label(text.color(ui.visuals().error_fg_color));
    } else {
        ui.label(text.weak());
    }
}
