// benches/reconcile.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use anitrakt_db::{
    model::Show,
    reconcile::reconcile,
    rules::IgnoreRule,
    specs::extract_shows,
};

const SHOWS: &str = include_str!("../tests/fixtures/shows.html");

fn synthetic_shows(n: i64) -> Vec<Show> {
    (1..=n)
        .map(|i| Show::new(format!("Show {}", n - i), i, i / 3 + 1, i % 4 + 1, None).unwrap())
        .collect()
}

fn rules() -> Vec<IgnoreRule> {
    serde_json::from_str(
        r#"[
            {"source": "remote", "type": "OR", "conditions": [{"title": "Show 7"}, {"mal_id": 42}], "description": "a"},
            {"source": "all", "type": "AND", "conditions": [{"season": 4}, {"guessed_slug": null}], "description": "b"},
            {"source": "local", "type": "ANY", "conditions": [{"trakt_id": 5}], "description": "c"}
        ]"#,
    )
    .unwrap()
}

fn bench_reconcile(c: &mut Criterion) {
    let candidates = synthetic_shows(5_000);
    let overrides: Vec<Show> = candidates.iter().step_by(50).cloned().collect();
    let rules = rules();

    c.bench_function("reconcile_5k", |b| {
        b.iter(|| {
            let out = reconcile(black_box(candidates.clone()), black_box(&rules), black_box(&overrides));
            black_box(out.len())
        })
    });
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_shows_fixture", |b| {
        b.iter(|| {
            let got = extract_shows(black_box(SHOWS)).unwrap();
            black_box(got.records.len())
        })
    });
}

criterion_group!(benches, bench_reconcile, bench_extract);
criterion_main!(benches);
