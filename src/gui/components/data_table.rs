// src/gui/components/data_table.rs
//
// Draws the live table: row number column first, then the page's columns.
// Click a header to sort by it; click again to reverse.
// Purely a view; the only write back into App is the sort request.

use eframe::egui::{self, Align, Color32, CursorIcon, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{HEADER_HEIGHT, INDEX_HEADER, ROW_HEIGHT};
use crate::gui::app::App;
use crate::table::{ColumnRole, ViewCell};

fn initial_width(role: ColumnRole, numeric: bool) -> f32 {
    match role {
        ColumnRole::Flag => 170.0,
        ColumnRole::Score => 70.0,
        ColumnRole::Link => 200.0,
        ColumnRole::Plain if numeric => 80.0,
        ColumnRole::Plain => 150.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_page_kind();
    let view = &app.view;
    let cols = view.ncols();

    if cols == 0 {
        ui.weak("No columns to show");
        return;
    }

    let sort = app.state.gui.sort.get(&kind).copied();

    // Numeric alignment follows the first row
    let numeric: Vec<bool> = (0..cols)
        .map(|c| view.rows.first().and_then(|r| r.get(c)).map(ViewCell::is_numeric).unwrap_or(false))
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked_col: Option<usize> = None;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                // Fresh widths when switching between reports
                .id_salt(("table_state", kind))
                .column(Column::exact(40.0));
            for c in 0..cols {
                let w = initial_width(view.roles[c], numeric[c]);
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new(INDEX_HEADER).strong());
                        });
                    });
                    for c in 0..cols {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let mut text = view.headers[c].clone();
                            if let Some((sc, order)) = sort {
                                if sc == c {
                                    text = format!("{text} {}", order.arrow());
                                }
                            }
                            let resp = ui
                                .add(egui::Label::new(RichText::new(text).strong())
                                    .selectable(false)
                                    .sense(Sense::click()))
                                .on_hover_cursor(CursorIcon::PointingHand);
                            if resp.clicked() {
                                clicked_col = Some(c);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, view.nrows(), |mut row| {
                        let i = row.index();
                        let Some(cells) = view.rows.get(i) else { return };

                        row.col(|ui| {
                            ui.centered_and_justified(|ui| {
                                ui.weak(view.row_number(i).to_string());
                            });
                        });
                        for (c, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                draw_cell(ui, cell, view.roles.get(c).copied().unwrap_or(ColumnRole::Plain));
                            });
                        }
                    });
                });
        });

    if let Some(c) = clicked_col {
        app.toggle_sort(c);
    }
}

fn draw_cell(ui: &mut egui::Ui, cell: &ViewCell, role: ColumnRole) {
    match role {
        ColumnRole::Link if cell.text.starts_with("http") => {
            ui.hyperlink(&cell.text);
        }
        ColumnRole::Score => {
            let mut rt = RichText::new(&cell.text);
            if let Some(outcome) = cell.outcome {
                rt = rt.background_color(outcome.color()).color(Color32::WHITE).strong();
            }
            ui.centered_and_justified(|ui| { ui.label(rt); });
        }
        _ if cell.is_numeric() => {
            ui.centered_and_justified(|ui| { ui.label(cell.text.as_str()); });
        }
        _ => {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell.text.as_str()); });
        }
    }
}
