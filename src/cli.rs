// src/cli.rs
//
// Headless front end: same load, same viewer operations, text instead of egui.
// Unlike the window, a failed load is an error here (exit code matters in scripts).

use std::fmt::Write as _;

use clap::Parser;

use crate::{
    config::{consts::{MSG_NO_ARTICLES, MSG_NO_DATA}, Options},
    error::LoadError,
    loader,
    model::ArticleSet,
    outlet,
    view::{self, Body, Screen},
    viewer::Phase,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Print collected book reviews without the GUI")]
pub struct CliArgs {
    #[command(flatten)]
    pub options: Options,

    /// Outlet key to open (default: first in the document)
    #[arg(short, long)]
    pub outlet: Option<String>,

    /// Zero-based article position; clamped to the outlet's last article
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// List outlets and article counts instead of printing an article
    #[arg(short, long)]
    pub list: bool,
}

pub fn run(args: &CliArgs) -> Result<String, LoadError> {
    let set = loader::load(&args.options.data)?;
    Ok(if args.list { list_outlets(&set) } else { render_text(&view::screen(&open(set, args))) })
}

/// Resolve the load and walk the viewer to the requested outlet/position.
pub fn open(set: ArticleSet, args: &CliArgs) -> Phase {
    let mut phase = Phase::loaded(set);

    if let Some(viewer) = phase.viewer_mut() {
        if let Some(key) = args.outlet.as_deref() {
            if !viewer.articles().contains(key) {
                logw!("CLI: unknown outlet {:?}, staying on {:?}", key, viewer.state().active_outlet());
            }
            viewer.select_outlet(key);
        }
        // go_next clamps, so stepping further than len is pointless
        let steps = args.index.min(viewer.active_articles().len());
        for _ in 0..steps {
            viewer.go_next();
        }
    }
    phase
}

pub fn list_outlets(set: &ArticleSet) -> String {
    if set.is_empty() {
        return join!(MSG_NO_DATA, "\n");
    }
    let mut out = s!();
    for (key, articles) in set.iter() {
        let _ = writeln!(out, "{key}\t{}\t{}", outlet::display_name(key), articles.len());
    }
    out
}

pub fn render_text(screen: &Screen<'_>) -> String {
    let (tabs, body, nav) = match screen {
        Screen::Loading => return s!(),
        Screen::NoData => return join!(MSG_NO_DATA, "\n"),
        Screen::Outlet { tabs, body, nav } => (tabs, body, nav),
    };

    let mut out = s!();
    let labels: Vec<String> = tabs
        .iter()
        .map(|t| if t.active { format!("[{}]", t.label) } else { t.label.clone() })
        .collect();
    let _ = writeln!(out, "{}", labels.join(" | "));
    let _ = writeln!(out);

    match body {
        Body::NoArticles => {
            let _ = writeln!(out, "{MSG_NO_ARTICLES}");
        }
        Body::Article(card) => {
            let _ = writeln!(out, "{}  {}  ({})", card.outlet_label, card.date, card.indicator());
            let _ = writeln!(out, "{}", card.title);
            if !card.link.is_empty() {
                let _ = writeln!(out, "{}", card.link);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", card.text);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} prev | next {}",
        if nav.prev_enabled { "◀" } else { "·" },
        if nav.next_enabled { "▶" } else { "·" },
    );
    out
}
