//! Benchmarks for intent replay and view projection.
//!
//! Run with: cargo bench --bench board_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use noteboard::board::{Board, Intent, NullReporter, Script};
use noteboard::domain::{Category, ColorTag, Note, NoteId};
use std::hint::black_box;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Category names to cycle through
const NAMES: &[&str] = &[
    "Scripts",
    "Research",
    "Ideas",
    "Personal Journal",
    "Tutorial / Class Notes",
];

/// Build a board with `count` categories and `count` notes, a fifth of which
/// reference a category that does not exist.
fn board_with(count: usize) -> Board {
    let categories = (0..count)
        .map(|i| {
            let name = format!("{} {}", NAMES[i % NAMES.len()], i);
            Category::new(name, ColorTag::ALL[i % ColorTag::ALL.len()]).unwrap()
        })
        .collect();
    let notes = (0..count)
        .map(|i| {
            let category = if i % 5 == 0 {
                "Deleted".to_string()
            } else {
                format!("{} {}", NAMES[i % NAMES.len()], i)
            };
            Note::new(NoteId::new(i as u32), format!("Note {i}"), "body", category)
        })
        .collect();
    Board::new(categories, notes)
}

/// A script that edits, adds and deletes `rounds` times.
fn churn_script(rounds: usize) -> Script {
    (0..rounds)
        .flat_map(|i| {
            [
                Intent::EditCategoryRequested(0),
                Intent::CategoryNameChanged(format!("Renamed {i}")),
                Intent::CommitCategory,
                Intent::AddCategoryRequested,
                Intent::CategoryNameChanged(format!("Added {i}")),
                Intent::CategoryColorChosen(ColorTag::Purple),
                Intent::CommitCategory,
                Intent::DeleteCategory(1),
            ]
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");

    for size in [10, 100, 1000] {
        let board = board_with(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("cards", size), &size, |b, _| {
            b.iter(|| black_box(board.view()));
        });
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for rounds in [10, 100] {
        let script = churn_script(rounds);
        group.throughput(Throughput::Elements(script.len() as u64));
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &rounds, |b, _| {
            b.iter(|| {
                let mut board = board_with(100);
                board.replay(&script, &mut NullReporter)
            });
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text: String = churn_script(100)
        .steps()
        .iter()
        .map(|s| format!("{}\n", s.intent))
        .collect();

    c.bench_function("parse_script", |b| {
        b.iter(|| Script::parse(black_box(&text)).unwrap())
    });
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(board_benches, bench_view, bench_replay, bench_parse);

criterion_main!(board_benches);
