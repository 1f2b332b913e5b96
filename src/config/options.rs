// src/config/options.rs
use std::path::PathBuf;

use clap::{Args, Parser};

use super::consts::*;
use crate::loader::DataSource;

/// Options shared by the GUI and the headless CLI.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Article document: a local path or an http(s) URL
    #[arg(short, long, env = DATA_SOURCE_ENV, default_value = DEFAULT_DATA_SOURCE)]
    pub data: DataSource,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "review_deck=trace")
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Font file with Hangul glyphs (TTF/OTF/TTC)
    #[arg(long)]
    pub font: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            data: DataSource::default(),
            log_level: s!(DEFAULT_LOG_LEVEL),
            log_file: None,
            font: None,
        }
    }
}

/// Command line of the GUI binary.
#[derive(Parser, Debug)]
#[command(name = "review_deck", version, about = "Browse today's collected book reviews")]
pub struct GuiArgs {
    #[command(flatten)]
    pub options: Options,
}
