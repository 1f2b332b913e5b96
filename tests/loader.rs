// tests/loader.rs
use std::fs;
use std::path::PathBuf;

use review_deck::error::{LoadError, SourceError};
use review_deck::loader::{self, DataSource};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("review_deck_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const SAMPLE: &str = r#"{
  "chosun": [
    {"title": "C1", "link": "https://www.chosun.com/1", "date": "2024-01-02", "content": "p1", "full_text": "long 1"},
    {"title": "C2", "link": "https://www.chosun.com/2", "date": "2024-01-01", "content": "p2"}
  ],
  "hani": [],
  "khan": [
    {"link": "https://www.khan.co.kr/3"}
  ]
}"#;

#[test]
fn parse_keeps_document_order() {
    let set = loader::parse_article_set(SAMPLE).unwrap();
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["chosun", "hani", "khan"]);

    let chosun = set.articles("chosun").unwrap();
    assert_eq!(chosun.iter().map(|a| a.title.as_str()).collect::<Vec<_>>(), vec!["C1", "C2"]);
    assert_eq!(chosun[0].body(), "long 1");
    assert_eq!(chosun[1].body(), "p2");
    assert_eq!(set.articles("hani").map(|a| a.len()), Some(0));
}

#[test]
fn missing_fields_read_as_empty_strings() {
    let set = loader::parse_article_set(SAMPLE).unwrap();
    let khan = &set.articles("khan").unwrap()[0];
    assert_eq!(khan.title, "");
    assert_eq!(khan.content, "");
    assert_eq!(khan.date, "");
    assert_eq!(khan.full_text, None);
    assert_eq!(khan.link, "https://www.khan.co.kr/3");
}

#[test]
fn non_map_documents_are_parse_errors() {
    for bad in ["[]", "\"hani\"", "{\"hani\": {}}", "{\"hani\": [1]}", "{", ""] {
        let err = loader::parse_article_set(bad).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)), "{bad:?} → {err}");
    }
}

#[test]
fn empty_object_is_an_empty_set() {
    let set = loader::parse_article_set("{}").unwrap();
    assert!(set.is_empty());
}

#[test]
fn load_reads_a_file() {
    let dir = tmp_dir("load_file");
    let path = dir.join("data.json");
    fs::write(&path, SAMPLE).unwrap();

    let set = loader::load(&DataSource::File(path)).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.article_count(), 3);
}

#[test]
fn missing_file_is_io_error_and_empty_fallback() {
    let dir = tmp_dir("missing");
    let src = DataSource::File(dir.join("nope.json"));

    assert!(matches!(loader::load(&src), Err(LoadError::Io { .. })));
    assert!(loader::load_or_empty(&src).is_empty());
}

#[test]
fn malformed_file_falls_back_to_empty() {
    let dir = tmp_dir("malformed");
    let path = dir.join("data.json");
    fs::write(&path, "{\"hani\": [").unwrap();

    assert!(loader::load_or_empty(&DataSource::File(path)).is_empty());
}

#[test]
fn spawn_reports_once_and_calls_back() {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    let dir = tmp_dir("spawn");
    let path = dir.join("data.json");
    fs::write(&path, SAMPLE).unwrap();

    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let pending = loader::spawn(DataSource::File(path), move || flag.store(true, Ordering::SeqCst));

    let set = pending.wait();
    assert_eq!(set.first_key(), Some("chosun"));

    // on_done runs right after the send; give the thread a moment.
    for _ in 0..200 {
        if called.load(Ordering::SeqCst) { break; }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert!(called.load(Ordering::SeqCst));
}

#[test]
fn spawn_failure_resolves_to_empty() {
    let dir = tmp_dir("spawn_fail");
    let pending = loader::spawn(DataSource::File(dir.join("absent.json")), || {});
    assert!(pending.wait().is_empty());
}

#[test]
fn data_source_from_str() {
    assert_eq!(
        "public/data.json".parse::<DataSource>().unwrap(),
        DataSource::File(PathBuf::from("public/data.json"))
    );
    assert!(matches!("https://example.com/data.json".parse::<DataSource>(), Ok(DataSource::Url(_))));
    assert!(matches!("http://localhost:5173/data.json".parse::<DataSource>(), Ok(DataSource::Url(_))));
    assert!(matches!("C:\\data\\data.json".parse::<DataSource>(), Ok(DataSource::File(_))));
    assert!(matches!("ftp://example.com/x".parse::<DataSource>(), Err(SourceError::Scheme(_))));
    assert!(matches!("   ".parse::<DataSource>(), Err(SourceError::Empty)));

    #[cfg(unix)]
    assert_eq!(
        "file:///tmp/data.json".parse::<DataSource>().unwrap(),
        DataSource::File(PathBuf::from("/tmp/data.json"))
    );
}

#[test]
fn default_source_is_public_data_json() {
    assert_eq!(DataSource::default().to_string(), "public/data.json");
}
