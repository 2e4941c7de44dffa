// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the viewer controller.
//!
//! Measures the performance of:
//! - Opening the viewer on a long sequence (snapshot copy)
//! - Stepping through the whole sequence
//! - Reconciling after the sequence shrinks
//! - Media classification of references

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pulse_viewer::application::port::StaticIdentity;
use pulse_viewer::domain::pulse::{MediaKind, Pulse, PulseId, Timestamp, UserId};
use pulse_viewer::ui::pulse_viewer::{Message, Preferences, State};
use std::hint::black_box;

fn sequence(n: usize) -> Vec<Pulse> {
    (0..n)
        .map(|i| {
            let media = if i % 3 == 0 {
                format!("media/{i}.mp4")
            } else {
                format!("media/{i}.jpg")
            };
            Pulse::new(
                PulseId::new(format!("p{i}")),
                media,
                Some(format!("caption {i}")),
                Timestamp::new(1_700_000_000 + i as i64, 0),
                UserId::new("alice"),
            )
        })
        .collect()
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("pulse_navigation");

    for len in [10usize, 100, 1_000] {
        let pulses = sequence(len);
        group.bench_with_input(BenchmarkId::new("open", len), &pulses, |b, pulses| {
            b.iter(|| black_box(State::open(pulses, len / 2, Preferences::default())));
        });
    }

    group.finish();
}

/// Walks forward to the end, then back to the start.
fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("pulse_navigation");
    let pulses = sequence(100);
    let identity = StaticIdentity::signed_in(UserId::new("alice"));

    group.bench_function("walk_there_and_back", |b| {
        b.iter(|| {
            let (mut viewer, _) = State::open(&pulses, 0, Preferences::default());
            for _ in 0..pulses.len() {
                viewer.handle(Message::NavigateNext, &identity);
            }
            for _ in 0..pulses.len() {
                viewer.handle(Message::NavigatePrevious, &identity);
            }
            black_box(viewer.index());
        });
    });

    group.bench_function("view_model", |b| {
        let (viewer, _) = State::open(&pulses, 50, Preferences::default());
        b.iter(|| black_box(viewer.view_model(&identity).map(|m| m.progress.len())));
    });

    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("pulse_navigation");
    let full = sequence(1_000);
    let shrunk = sequence(10);

    group.bench_function("reconcile_shrink", |b| {
        b.iter(|| {
            let (mut viewer, _) = State::open(&full, 999, Preferences::default());
            black_box(viewer.reconcile(&shrunk));
        });
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let references = [
        "media/clip.MP4",
        "https://cdn.example.com/a/b/c.webm?token=abc#t=10",
        "photo.jpeg",
        "no_extension",
    ];

    c.bench_function("classify_media", |b| {
        b.iter(|| {
            for reference in references {
                black_box(MediaKind::classify(black_box(reference)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_open,
    bench_walk,
    bench_reconcile,
    bench_classify
);
criterion_main!(benches);
