// src/gui/components/menu.rs
//
// Renders the left report list (single choice) and performs the page
// switch itself.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Reports");
    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked: Option<usize> = None;
    let cur = app.current_index();

    egui::ScrollArea::vertical()
        .id_salt("reports_menu_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, page) in router::all_pages().iter().enumerate() {
                let selected = idx == cur;
                let resp = ui.selectable_label(selected, page.label());
                if resp.clicked() && !selected {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        app.switch_to(idx);
    }
}
