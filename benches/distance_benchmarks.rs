//! Benchmarks for the distance metric and the per-keystroke ranking loop.
//!
//! Tests various scenarios:
//! - String length variations (short, medium, long)
//! - Similarity patterns (identical, similar, different)
//! - Character sets (ASCII, Unicode)
//! - Whole-dictionary ranking cost per keystroke

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use typeahead::distance::{standard_distance, standard_distance_with_buffers};
use typeahead::rank::{rank, RankOptions};

// ============================================================================
// Test Data Generation
// ============================================================================

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_identical", "test", "test"),
        ("short_1edit", "test", "best"),
        ("short_different", "abc", "xyz"),
        ("medium_identical", "programming", "programming"),
        ("medium_similar", "programming", "programing"),
        ("medium_different", "completely", "different"),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
        ("unicode_short", "café", "cafe"),
        ("unicode_japanese", "日本語", "日本語"),
    ]
}

/// A synthetic dictionary in the low thousands, the interactive target size.
fn generate_dictionary(size: usize) -> Vec<String> {
    let stems = [
        "cat", "cart", "carbon", "castle", "dog", "dot", "door", "test", "toast", "type",
        "typeahead", "query", "quiet", "quick", "render", "rank", "word", "world", "work",
    ];
    (0..size)
        .map(|i| format!("{}{}", stems[i % stems.len()], i / stems.len()))
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_standard_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_distance");

    for (name, source, target) in generate_test_pairs() {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, (source, target)| {
                b.iter(|| standard_distance(black_box(source), black_box(target)));
            },
        );
    }

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");

    let source: Vec<char> = "typeahead".chars().collect();
    let target: Vec<char> = "typewriter".chars().collect();

    group.bench_function("fresh_allocations", |b| {
        b.iter(|| standard_distance(black_box("typeahead"), black_box("typewriter")));
    });

    group.bench_function("reused_rows", |b| {
        let mut prev = Vec::new();
        let mut curr = Vec::new();
        b.iter(|| {
            standard_distance_with_buffers(
                black_box(&source),
                black_box(&target),
                &mut prev,
                &mut curr,
            )
        });
    });

    group.finish();
}

fn bench_rank_per_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_per_keystroke");

    let options = RankOptions::default();

    for size in [100, 1_000, 5_000] {
        let dictionary = generate_dictionary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &dictionary,
            |b, dictionary| {
                b.iter(|| rank(black_box("cart"), black_box(dictionary), &options).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_standard_distance,
    bench_buffer_reuse,
    bench_rank_per_keystroke
);
criterion_main!(benches);
