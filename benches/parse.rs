// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use review_deck::{loader, view, viewer::Phase};

/// A document roughly the size of a busy week: 6 outlets × 200 reviews.
fn sample_doc() -> String {
    let outlets = ["chosun", "hani", "donga", "joongang", "khan", "hankook"];
    let body = "책 한 권을 천천히 읽는 일. ".repeat(200);

    let mut doc = String::from("{");
    for (i, key) in outlets.iter().enumerate() {
        if i > 0 { doc.push(','); }
        doc.push_str(&format!("\"{key}\":["));
        for n in 0..200 {
            if n > 0 { doc.push(','); }
            doc.push_str(&format!(
                r#"{{"title":"{key} {n}","link":"https://example.com/{key}/{n}","date":"2024-01-01","content":"preview","full_text":"{body}"}}"#
            ));
        }
        doc.push(']');
    }
    doc.push('}');
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_doc();

    c.bench_function("parse_article_set", |b| {
        b.iter(|| {
            let set = loader::parse_article_set(black_box(&doc)).unwrap();
            black_box(set.article_count())
        })
    });

    let mut phase = Phase::loaded(loader::parse_article_set(&doc).unwrap());
    c.bench_function("next_and_screen", |b| {
        b.iter(|| {
            if let Some(v) = phase.viewer_mut() {
                v.go_next();
            }
            black_box(matches!(view::screen(&phase), view::Screen::Outlet { .. }))
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
