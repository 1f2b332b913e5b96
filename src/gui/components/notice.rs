// src/gui/components/notice.rs
//
// Full-panel placeholders: still loading, or nothing was collected.

use eframe::egui::{self, RichText};

use crate::config::consts::{MSG_LOADING, MSG_NO_DATA, MSG_NO_DATA_HINT};

pub fn loading(ui: &mut egui::Ui) {
    centered(ui, |ui| {
        ui.spinner();
        ui.label(RichText::new(MSG_LOADING).strong().size(16.0));
    });
}

pub fn no_data(ui: &mut egui::Ui) {
    centered(ui, |ui| {
        ui.label(RichText::new("📖").size(48.0).weak());
        ui.label(MSG_NO_DATA);
        ui.label(RichText::new(MSG_NO_DATA_HINT).small().weak());
    });
}

fn centered(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.35).max(0.0));
        add_contents(ui);
    });
}
