// src/gui/app.rs
use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, Options},
    loader::{self, PendingLoad},
    view::{self, Action, Screen},
    viewer::Phase,
};

use super::{components, fonts};

pub fn run(options: Options, native: eframe::NativeOptions) -> Result<(), eframe::Error> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &options)))),
    )
}

pub struct App {
    // single source of truth (UI thread only)
    phase: Phase,

    // the one load of this run; dropped once it reports
    pending: Option<PendingLoad>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, options: &Options) -> Self {
        fonts::install(&cc.egui_ctx, options.font.as_deref());

        let ctx = cc.egui_ctx.clone();
        logf!("Init: loading {}", options.data);
        let pending = loader::spawn(options.data.clone(), move || ctx.request_repaint());

        Self::with_pending(pending)
    }

    /// App waiting on an already started load.
    pub fn with_pending(pending: PendingLoad) -> Self {
        Self { phase: Phase::Loading, pending: Some(pending) }
    }

    pub fn phase(&self) -> &Phase { &self.phase }

    /// Move Loading → Empty/Ready once the loader has reported.
    pub fn poll_load(&mut self) {
        let Some(set) = self.pending.as_ref().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending = None;
        self.phase = Phase::loaded(set);

        match &self.phase {
            Phase::Ready(v) => logf!(
                "Init: ready, {} outlet(s), active={:?}",
                v.articles().len(),
                v.state().active_outlet()
            ),
            _ => logf!("Init: no data"),
        }
    }

    /// Apply actions gathered while drawing. Ignored unless articles are shown.
    pub fn dispatch(&mut self, actions: Vec<Action>) {
        let Some(viewer) = self.phase.viewer_mut() else {
            return;
        };
        for action in actions {
            logd!("UI: {:?}", action);
            action.apply(viewer);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        let mut actions = Vec::new();
        let screen = view::screen(&self.phase);

        if let Screen::Outlet { nav, .. } = &screen {
            let (left, right) = ctx.input(|i| {
                (i.key_pressed(egui::Key::ArrowLeft), i.key_pressed(egui::Key::ArrowRight))
            });
            actions.extend(view::paging_actions(*nav, left, right));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui);
            if let Screen::Outlet { tabs, .. } = &screen {
                components::tabs::draw(ui, tabs, &mut actions);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &screen {
            Screen::Loading => components::notice::loading(ui),
            Screen::NoData => components::notice::no_data(ui),
            Screen::Outlet { body, nav, .. } => components::card::draw(ui, body, *nav, &mut actions),
        });

        self.dispatch(actions);
    }
}
