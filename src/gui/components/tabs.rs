// src/gui/components/tabs.rs
//
// One selectable label per outlet, in document order.
// Clicking an inactive tab queues a SelectOutlet; positions are untouched.

use eframe::egui;

use crate::view::{Action, Tab};

pub fn draw(ui: &mut egui::Ui, tabs: &[Tab<'_>], actions: &mut Vec<Action>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for tab in tabs {
            if ui.selectable_label(tab.active, tab.label.as_str()).clicked() && !tab.active {
                logf!("UI: Tab switch → {}", tab.key);
                actions.push(Action::SelectOutlet(s!(tab.key)));
            }
        }
    });
}
