// src/viewer.rs
//
// Reading state for the loaded articles.
//
// - ViewState: active outlet + per-outlet position. Updates return a new value.
// - Viewer:    ArticleSet paired with its ViewState; the only mutator of the state.
// - Phase:     Loading → (Empty | Ready). Rendering is a function of Phase alone.
//
// Positions stay inside [0, len-1] (0 for empty outlets); stepping past either
// end is a no-op, not an error.

use std::collections::HashMap;

use crate::model::{ArticleRecord, ArticleSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Option<String>,
    positions: HashMap<String, usize>,
}

impl ViewState {
    /// First outlet active, every position at 0. Unset for an empty set.
    pub fn initial(set: &ArticleSet) -> Self {
        Self {
            active: set.first_key().map(String::from),
            positions: set.keys().map(|k| (s!(k), 0)).collect(),
        }
    }

    pub fn active_outlet(&self) -> Option<&str> { self.active.as_deref() }

    /// Stored position for `key`; outlets never visited read as 0.
    pub fn position(&self, key: &str) -> usize {
        self.positions.get(key).copied().unwrap_or(0)
    }

    /// Position of the active outlet, if any.
    pub fn active_position(&self) -> Option<usize> {
        self.active_outlet().map(|k| self.position(k))
    }

    #[must_use]
    pub fn select_outlet(mut self, set: &ArticleSet, key: &str) -> Self {
        if set.contains(key) {
            self.active = Some(s!(key));
        }
        self
    }

    #[must_use]
    pub fn go_prev(mut self) -> Self {
        if let Some(key) = self.active.as_deref() {
            let pos = self.position(key);
            if pos > 0 {
                self.positions.insert(s!(key), pos - 1);
            }
        }
        self
    }

    #[must_use]
    pub fn go_next(mut self, set: &ArticleSet) -> Self {
        if let Some(key) = self.active.as_deref() {
            let len = set.articles(key).map_or(0, <[_]>::len);
            let pos = self.position(key);
            if pos + 1 < len {
                self.positions.insert(s!(key), pos + 1);
            }
        }
        self
    }

    pub fn current_article<'a>(&self, set: &'a ArticleSet) -> Option<&'a ArticleRecord> {
        let key = self.active_outlet()?;
        set.articles(key)?.get(self.position(key))
    }
}

/// Loaded articles and the reading state over them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewer {
    articles: ArticleSet,
    state: ViewState,
}

impl Viewer {
    pub fn new(articles: ArticleSet) -> Self {
        let state = ViewState::initial(&articles);
        Self { articles, state }
    }

    pub fn articles(&self) -> &ArticleSet { &self.articles }
    pub fn state(&self) -> &ViewState { &self.state }

    pub fn select_outlet(&mut self, key: &str) {
        let prev = std::mem::take(&mut self.state);
        self.state = prev.select_outlet(&self.articles, key);
    }

    pub fn go_prev(&mut self) {
        let prev = std::mem::take(&mut self.state);
        self.state = prev.go_prev();
    }

    pub fn go_next(&mut self) {
        let prev = std::mem::take(&mut self.state);
        self.state = prev.go_next(&self.articles);
    }

    pub fn current_article(&self) -> Option<&ArticleRecord> {
        self.state.current_article(&self.articles)
    }

    /// Articles of the active outlet (empty slice when unset).
    pub fn active_articles(&self) -> &[ArticleRecord] {
        self.state
            .active_outlet()
            .and_then(|k| self.articles.articles(k))
            .unwrap_or(&[])
    }
}

/// What the window is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Empty,
    Ready(Viewer),
}

impl Phase {
    /// Resolve a finished load.
    pub fn loaded(set: ArticleSet) -> Self {
        if set.is_empty() {
            Phase::Empty
        } else {
            Phase::Ready(Viewer::new(set))
        }
    }

    pub fn is_loading(&self) -> bool { matches!(self, Phase::Loading) }

    pub fn viewer(&self) -> Option<&Viewer> {
        match self {
            Phase::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn viewer_mut(&mut self) -> Option<&mut Viewer> {
        match self {
            Phase::Ready(v) => Some(v),
            _ => None,
        }
    }
}
