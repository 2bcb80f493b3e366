use criterion::{Criterion, criterion_group, criterion_main};
use puzzle_solver::knight::board::candidate_boards;
use puzzle_solver::knight::trip::{Square, Trip};
use puzzle_solver::sudoku::solver::{classify, divisor_multiples, extract_digits};
use std::hint::black_box;

/// A full-length trip that scores the target on one of the six candidate
/// boards, so validation exercises both the hit and the pruned paths.
fn scoring_trip() -> Trip {
    [
        (0, 0),
        (1, 0),
        (2, 0),
        (2, 1),
        (3, 0),
        (3, 1),
        (4, 0),
        (0, 3),
        (4, 1),
        (0, 4),
        (0, 1),
        (4, 2),
        (0, 2),
        (5, 0),
        (5, 1),
        (1, 1),
        (5, 2),
        (1, 2),
        (2, 0),
        (2, 2),
    ]
    .into_iter()
    .map(|(row, col)| Square::new(row, col))
    .collect()
}

fn bench_trip_validation(c: &mut Criterion) {
    let boards = candidate_boards();
    let trip = scoring_trip();
    c.bench_function("trip_score_all_candidates", |b| {
        b.iter(|| {
            boards
                .iter()
                .filter(|board| board.satisfies(black_box(&trip)))
                .count()
        });
    });
}

fn bench_candidate_generation(c: &mut Criterion) {
    c.bench_function("candidate_boards", |b| {
        b.iter(|| black_box(candidate_boards()));
    });
}

fn bench_digit_extraction(c: &mut Criterion) {
    c.bench_function("extract_digits", |b| {
        b.iter(|| {
            (123_456_780..123_456_800)
                .filter_map(|number| extract_digits(black_box(number)))
                .count()
        });
    });
}

fn bench_classification(c: &mut Criterion) {
    let (second_row, _) = extract_digits(134_620_785).unwrap();
    let (candidate, _) = extract_digits(306_814_527).unwrap();
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&candidate), black_box(&second_row)));
    });
}

fn bench_divisor_collection(c: &mut Criterion) {
    c.bench_function("divisor_multiples", |b| {
        b.iter(|| divisor_multiples(black_box(&[134_620_785, 987_654_123])));
    });
}

criterion_group!(
    benches,
    bench_trip_validation,
    bench_candidate_generation,
    bench_digit_extraction,
    bench_classification,
    bench_divisor_collection
);
criterion_main!(benches);
