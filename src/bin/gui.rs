// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use clap::Parser;
use eframe::egui::ViewportBuilder;
use review_deck::{
    config::{consts::{APP_TITLE, WINDOW_H, WINDOW_W}, GuiArgs},
    gui,
    log,
};

fn main() {
    let args = GuiArgs::parse();
    let opts = args.options;

    if let Err(e) = log::init(&opts.log_level, opts.log_file.as_deref()) {
        eprintln!("Logging disabled: {}", e);
    }

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_min_inner_size([480.0, 360.0])
            .with_icon(gui::icon::app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(opts, native) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
