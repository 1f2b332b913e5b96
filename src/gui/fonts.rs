// src/gui/fonts.rs
//
// egui's bundled fonts have no Hangul. Install one from disk: --font first,
// then the well-known system locations. Without one, titles render as boxes.

use std::{fs, path::{Path, PathBuf}, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

use crate::config::consts::CJK_FONT_CANDIDATES;

const FONT_NAME: &str = "hangul";

pub fn install(ctx: &egui::Context, font: Option<&Path>) {
    let candidates = font
        .map(Path::to_path_buf)
        .into_iter()
        .chain(CJK_FONT_CANDIDATES.iter().map(|p| PathBuf::from(*p)));

    for path in candidates {
        match fs::read(&path) {
            Ok(bytes) => {
                ctx.set_fonts(with_fallback(bytes));
                logf!("Fonts: using {}", path.display());
                return;
            }
            Err(e) => logd!("Fonts: skip {} ({})", path.display(), e),
        }
    }

    logw!("Fonts: no Hangul font found; pass --font <file>");
}

/// Default definitions with `bytes` appended as the last fallback of every family.
fn with_fallback(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(s!(FONT_NAME));
    }
    fonts
}
