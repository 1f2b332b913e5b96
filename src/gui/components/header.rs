// src/gui/components/header.rs
use eframe::egui::{self, RichText};

use crate::config::consts::APP_TITLE;

pub fn draw(ui: &mut egui::Ui) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("📖").size(22.0));
        ui.label(RichText::new(APP_TITLE).size(22.0).strong());
    });
    ui.add_space(4.0);
}
