// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use matchboard::{
    config::{
        consts::{WINDOW_H, WINDOW_W},
        options::AppOptions,
        state::AppState },
    gui,
};
use eframe::egui::{ IconData, ViewportBuilder };

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/matchboard.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let mut viewport = ViewportBuilder::default().with_inner_size([WINDOW_W, WINDOW_H]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    let state = AppState::new(AppOptions::from_env());
    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
