// src/gui/components/card.rs
//
// Prev button | article card | next button.
// Buttons are inert exactly when Nav says so; the card itself never mutates state.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Size, StripBuilder};

use crate::config::consts::{LINK_LABEL, MSG_NO_ARTICLES};
use crate::view::{Action, Body, Card, Nav};

const NAV_W: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, body: &Body<'_>, nav: Nav, actions: &mut Vec<Action>) {
    StripBuilder::new(ui)
        .size(Size::exact(NAV_W))
        .size(Size::remainder().at_least(240.0))
        .size(Size::exact(NAV_W))
        .horizontal(|mut strip| {
            strip.cell(|ui| nav_button(ui, "◀", nav.prev_enabled, Action::Prev, actions));
            strip.cell(|ui| {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.set_min_size(ui.available_size());
                        match body {
                            Body::NoArticles => no_articles(ui),
                            Body::Article(card) => article(ui, card),
                        }
                    });
            });
            strip.cell(|ui| nav_button(ui, "▶", nav.next_enabled, Action::Next, actions));
        });
}

fn nav_button(ui: &mut egui::Ui, glyph: &str, enabled: bool, action: Action, actions: &mut Vec<Action>) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() / 2.0 - 18.0).max(0.0));
        let button = egui::Button::new(RichText::new(glyph).size(20.0)).min_size(egui::vec2(36.0, 36.0));
        if ui.add_enabled(enabled, button).clicked() {
            actions.push(action);
        }
    });
}

fn no_articles(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.4).max(0.0));
        ui.label(RichText::new(MSG_NO_ARTICLES).weak());
    });
}

fn article(ui: &mut egui::Ui, card: &Card<'_>) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(&card.outlet_label).strong());
        if !card.date.is_empty() {
            ui.label(RichText::new(card.date).weak());
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(card.indicator()).monospace().strong());
        });
    });

    ui.add_space(6.0);
    ui.label(RichText::new(card.title).size(20.0).strong());

    match card.external_link() {
        Some(url) => {
            ui.hyperlink_to(format!("{LINK_LABEL} ›"), url);
        }
        None if !card.link.is_empty() => {
            ui.label(RichText::new(card.link).weak().monospace());
        }
        None => {}
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("card_body")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(egui::Label::new(RichText::new(card.text).size(15.0)).wrap());
        });
}
