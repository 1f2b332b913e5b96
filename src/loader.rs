// src/loader.rs
//
// One-shot load of the article document.
// Any failure is logged and turned into an empty ArticleSet; nothing is retried.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use url::Url;

use crate::config::consts::{DEFAULT_DATA_SOURCE, LOADER_THREAD, USER_AGENT};
use crate::error::{LoadError, SourceError};
use crate::model::ArticleSet;

/// Where the document lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl Default for DataSource {
    fn default() -> Self { DataSource::File(PathBuf::from(DEFAULT_DATA_SOURCE)) }
}

impl FromStr for DataSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SourceError::Empty);
        }

        // Windows drive letters ("C:\...") parse as a one-letter scheme; treat as paths.
        match Url::parse(s) {
            Ok(url) if url.scheme().len() > 1 => match url.scheme() {
                "http" | "https" => Ok(DataSource::Url(url)),
                "file" => url
                    .to_file_path()
                    .map(DataSource::File)
                    .map_err(|_| SourceError::FilePath(s!(s))),
                other => Err(SourceError::Scheme(s!(other))),
            },
            _ => Ok(DataSource::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => write!(f, "{u}"),
        }
    }
}

pub fn parse_article_set(text: &str) -> Result<ArticleSet, LoadError> {
    Ok(serde_json::from_str(text)?)
}

fn fetch_text(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
        DataSource::Url(url) => {
            let client = reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .build()?;
            let text = client
                .get(url.clone())
                .send()?
                .error_for_status()?
                .text()?;
            Ok(text)
        }
    }
}

/// Read and parse the document.
pub fn load(source: &DataSource) -> Result<ArticleSet, LoadError> {
    logd!("Load: fetching {}", source);
    let text = fetch_text(source)?;
    let set = parse_article_set(&text)?;
    logf!(
        "Load: {} outlet(s), {} article(s) from {}",
        set.len(),
        set.article_count(),
        source
    );
    Ok(set)
}

/// `load`, with failures logged and replaced by the empty set.
pub fn load_or_empty(source: &DataSource) -> ArticleSet {
    match load(source) {
        Ok(set) => set,
        Err(e) => {
            loge!("Load: failed for {}: {}", source, e);
            ArticleSet::new()
        }
    }
}

/// Handle to a load running on the loader thread.
pub struct PendingLoad {
    rx: Receiver<ArticleSet>,
}

impl PendingLoad {
    /// Non-blocking. `Some` once the load has finished (or the worker died).
    pub fn poll(&self) -> Option<ArticleSet> {
        match self.rx.try_recv() {
            Ok(set) => Some(set),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                loge!("Load: {}", LoadError::Disconnected);
                Some(ArticleSet::new())
            }
        }
    }

    /// Block until the result arrives.
    pub fn wait(self) -> ArticleSet {
        self.rx.recv().unwrap_or_else(|_| {
            loge!("Load: {}", LoadError::Disconnected);
            ArticleSet::new()
        })
    }
}

/// Start the one load of this run. `on_done` fires after the result is sent.
pub fn spawn<F>(source: DataSource, on_done: F) -> PendingLoad
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name(s!(LOADER_THREAD))
        .spawn(move || {
            let set = load_or_empty(&source);
            // Receiver gone means the window closed first.
            let _ = tx.send(set);
            on_done();
        });

    // The sender went down with the closure; poll() will report Disconnected.
    if let Err(e) = spawned {
        loge!("Load: cannot start loader thread: {}", e);
    }

    PendingLoad { rx }
}
