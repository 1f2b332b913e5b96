// src/view.rs
//
// Pure projection of Phase → Screen. The GUI and the CLI both draw from this,
// so every enable/disable rule lives here and nowhere else.

use url::Url;

use crate::outlet;
use crate::viewer::{Phase, Viewer};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Loading,
    /// Nothing was loaded; no tabs.
    NoData,
    Outlet {
        tabs: Vec<Tab<'a>>,
        body: Body<'a>,
        nav: Nav,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab<'a> {
    pub key: &'a str,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body<'a> {
    /// Active outlet has no articles.
    NoArticles,
    Article(Card<'a>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card<'a> {
    pub outlet_label: String,
    pub date: &'a str,
    pub title: &'a str,
    /// Raw link text, trimmed.
    pub link: &'a str,
    pub text: &'a str,
    /// Zero-based.
    pub position: usize,
    pub total: usize,
}

impl<'a> Card<'a> {
    /// "3 / 5"
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.position + 1, self.total)
    }

    /// The link, when it is an absolute URL with a host. Anything else is shown as text.
    pub fn external_link(&self) -> Option<&'a str> {
        external_link(self.link)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nav {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// User intent coming back from the drawn screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectOutlet(String),
    Prev,
    Next,
}

impl Action {
    pub fn apply(self, viewer: &mut Viewer) {
        match self {
            Action::SelectOutlet(key) => viewer.select_outlet(&key),
            Action::Prev => viewer.go_prev(),
            Action::Next => viewer.go_next(),
        }
    }
}

/// Arrow-key paging. A direction the buttons would refuse yields nothing.
pub fn paging_actions(nav: Nav, left: bool, right: bool) -> Vec<Action> {
    let mut out = Vec::new();
    if left && nav.prev_enabled {
        out.push(Action::Prev);
    }
    if right && nav.next_enabled {
        out.push(Action::Next);
    }
    out
}

pub fn screen(phase: &Phase) -> Screen<'_> {
    match phase {
        Phase::Loading => Screen::Loading,
        Phase::Empty => Screen::NoData,
        Phase::Ready(viewer) => outlet_screen(viewer),
    }
}

fn outlet_screen(viewer: &Viewer) -> Screen<'_> {
    let state = viewer.state();
    let active = state.active_outlet();

    let tabs = viewer
        .articles()
        .keys()
        .map(|key| Tab {
            key,
            label: outlet::display_name(key),
            active: Some(key) == active,
        })
        .collect();

    let articles = viewer.active_articles();
    let position = state.active_position().unwrap_or(0);

    let (body, nav) = match (active, viewer.current_article()) {
        (Some(key), Some(article)) => {
            let card = Card {
                outlet_label: outlet::display_name(key),
                date: &article.date,
                title: &article.title,
                link: article.link.trim(),
                text: article.body(),
                position,
                total: articles.len(),
            };
            let nav = Nav {
                prev_enabled: position > 0,
                next_enabled: position + 1 < articles.len(),
            };
            (Body::Article(card), nav)
        }
        _ => (Body::NoArticles, Nav::default()),
    };

    Screen::Outlet { tabs, body, nav }
}

fn external_link(link: &str) -> Option<&str> {
    let link = link.trim();
    Url::parse(link)
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .map(|_| link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_absolute_links_are_clickable() {
        assert_eq!(external_link("https://www.hani.co.kr/arti/1"), Some("https://www.hani.co.kr/arti/1"));
        assert_eq!(external_link(" http://x "), Some("http://x"));
        assert_eq!(external_link("/arti/culture/book/1.html"), None);
        assert_eq!(external_link(""), None);
        assert_eq!(external_link("mailto:a@b.c"), None);
    }

    #[test]
    fn paging_respects_disabled_directions() {
        let both = Nav { prev_enabled: true, next_enabled: true };
        let first = Nav { prev_enabled: false, next_enabled: true };
        let last = Nav { prev_enabled: true, next_enabled: false };

        assert_eq!(paging_actions(both, true, true), vec![Action::Prev, Action::Next]);
        assert_eq!(paging_actions(both, false, false), Vec::<Action>::new());
        assert_eq!(paging_actions(first, true, false), Vec::<Action>::new());
        assert_eq!(paging_actions(first, true, true), vec![Action::Next]);
        assert_eq!(paging_actions(last, false, true), Vec::<Action>::new());
        assert_eq!(paging_actions(last, true, true), vec![Action::Prev]);
        assert_eq!(paging_actions(Nav::default(), true, true), Vec::<Action>::new());
    }

    #[test]
    fn indicator_is_one_based() {
        let card = Card {
            outlet_label: s!("한겨레"),
            date: "",
            title: "",
            link: "",
            text: "",
            position: 2,
            total: 5,
        };
        assert_eq!(card.indicator(), "3 / 5");
    }
}
