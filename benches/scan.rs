use criterion::{criterion_group, criterion_main, Criterion};
use keynote_scalper::matcher::{FiredTargets, MatchOptions, Matcher};
use keynote_scalper::triggers::TriggerTable;
use keynote_scalper::types::MatchMode;
use std::hint::black_box;

const SEGMENT: &str = "thanks everyone for joining us this morning, we have been building the future of \
    retail investing and honestly I don't think bitcoin is going anywhere, the economy keeps \
    moving and prediction markets like kalshi are part of that story";

fn bench_scan(c: &mut Criterion) {
    let matcher = Matcher::new(TriggerTable::default_table());
    let empty = FiredTargets::new();

    c.bench_function("scan_segment_substring", |b| {
        b.iter(|| matcher.scan_at(black_box(SEGMENT), &empty, "00:00:00"))
    });

    let whole_word = Matcher::new(TriggerTable::default_table())
        .with_options(MatchOptions { mode: MatchMode::WholeWord, ..MatchOptions::default() });
    c.bench_function("scan_segment_whole_word", |b| {
        b.iter(|| whole_word.scan_at(black_box(SEGMENT), &empty, "00:00:00"))
    });

    let mut fired = FiredTargets::new();
    for entry in matcher.table().iter() {
        fired.insert(entry.target_id.clone());
    }
    c.bench_function("scan_segment_all_fired", |b| {
        b.iter(|| matcher.scan_at(black_box(SEGMENT), &fired, "00:00:00"))
    });

    let long: String = std::iter::repeat(SEGMENT).take(50).collect::<Vec<_>>().join(" ");
    c.bench_function("scan_long_transcript", |b| {
        b.iter(|| matcher.scan_at(black_box(&long), &empty, "00:00:00"))
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
