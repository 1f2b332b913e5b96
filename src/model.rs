// src/model.rs
//
// Loaded article data. Read-only after the loader hands it over.
//
// - ArticleRecord: one collected review. Missing or null string fields read as "".
// - ArticleSet:    outlet key → records, in document order (keys and records).

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    /// Preview text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub full_text: Option<String>,
}

impl ArticleRecord {
    /// Text shown on the card: `full_text` when it has something in it, else `content`.
    pub fn body(&self) -> &str {
        match self.full_text.as_deref() {
            Some(full) if !full.is_empty() => full,
            _ => &self.content,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// Ordered outlet → articles mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleSet {
    outlets: Vec<(String, Vec<ArticleRecord>)>,
}

impl ArticleSet {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, articles: Vec<ArticleRecord>) {
        let key = key.into();
        match self.outlets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = articles,
            None => self.outlets.push((key, articles)),
        }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.outlets.is_empty() }
    #[inline] pub fn len(&self) -> usize { self.outlets.len() }

    pub fn first_key(&self) -> Option<&str> {
        self.outlets.first().map(|(k, _)| k.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.outlets.iter().any(|(k, _)| k == key)
    }

    pub fn articles(&self, key: &str) -> Option<&[ArticleRecord]> {
        self.outlets
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.outlets.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ArticleRecord])> {
        self.outlets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of records across all outlets.
    pub fn article_count(&self) -> usize {
        self.outlets.iter().map(|(_, v)| v.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<ArticleRecord>)> for ArticleSet {
    fn from_iter<I: IntoIterator<Item = (K, Vec<ArticleRecord>)>>(iter: I) -> Self {
        let mut set = ArticleSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

// serde's HashMap/BTreeMap lose document order, so walk the map by hand.
impl<'de> Deserialize<'de> for ArticleSet {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = ArticleSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of outlet keys to article arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ArticleSet, A::Error> {
                let mut set = ArticleSet {
                    outlets: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((key, articles)) = map.next_entry::<String, Vec<ArticleRecord>>()? {
                    set.insert(key, articles);
                }
                Ok(set)
            }
        }

        d.deserialize_map(SetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str) -> ArticleRecord {
        ArticleRecord { title: s!(title), ..ArticleRecord::default() }
    }

    #[test]
    fn body_prefers_full_text() {
        let mut r = ArticleRecord { content: s!("preview"), ..ArticleRecord::default() };
        assert_eq!(r.body(), "preview");
        r.full_text = Some(s!("long body"));
        assert_eq!(r.body(), "long body");
        r.full_text = Some(s!());
        assert_eq!(r.body(), "preview");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set = ArticleSet::new();
        set.insert("a", vec![rec("1")]);
        set.insert("b", vec![]);
        set.insert("a", vec![rec("2"), rec("3")]);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(set.articles("a").map(|v| v.len()), Some(2));
        assert_eq!(set.article_count(), 2);
    }

    #[test]
    fn null_fields_read_as_empty() {
        let r: ArticleRecord =
            serde_json::from_str(r#"{"title": null, "link": "http://x", "full_text": null}"#).unwrap();
        assert_eq!(r.title, "");
        assert_eq!(r.content, "");
        assert_eq!(r.date, "");
        assert_eq!(r.full_text, None);
    }
}
