//! Integration tests for knight-walk
//!
//! These tests exercise the full pipeline: running a batch of walks across
//! workers, summarizing the sample, and rendering the histogram. The
//! statistical tests use tolerance bands rather than exact values, since
//! unseeded runs are nondeterministic by design.

use knight_walk::histogram::Histogram;
use knight_walk::runner::{RunConfig, run_simulations};
use knight_walk::stats::Summary;
use knight_walk::walk::simulate_walk;

// =============================================================================
// Helper functions
// =============================================================================

/// Run a seeded batch and return its sample.
fn run_seeded(simulations: u64, moves: usize, workers: usize, seed: u64) -> Vec<u32> {
    let config = RunConfig {
        simulations,
        moves,
        workers: Some(workers),
        seed: Some(seed),
    };
    run_simulations(&config)
        .expect("seeded run should succeed")
        .counts
}

// =============================================================================
// End-to-end pipeline tests
// =============================================================================

#[test]
fn test_full_pipeline_produces_summary_and_histogram() {
    let counts = run_seeded(5000, 50, 4, 7);
    assert_eq!(counts.len(), 5000);

    let summary = Summary::from_sample(&counts).expect("non-empty sample");
    assert!(summary.min >= 1);
    assert!(summary.max <= 51);
    assert!(summary.mean >= f64::from(summary.min));
    assert!(summary.mean <= f64::from(summary.max));

    let histogram = Histogram::build(&counts).expect("non-empty sample");
    let text = histogram.render("test distribution");
    assert!(text.contains("trials: 5000"));
}

#[test]
fn test_same_seed_same_sample() {
    let a = run_seeded(2000, 30, 3, 99);
    let b = run_seeded(2000, 30, 3, 99);
    assert_eq!(a, b);
}

#[test]
fn test_every_count_within_walk_bounds() {
    for moves in [0, 1, 10] {
        let counts = run_seeded(500, moves, 2, 5);
        for &c in &counts {
            assert!(c >= 1, "{c} below 1 for {moves} moves");
            assert!(c as usize <= moves + 1, "{c} above bound for {moves} moves");
        }
    }
}

// =============================================================================
// Statistical sanity (tolerance bands, not exact values)
// =============================================================================

#[test]
fn test_mean_shows_collisions_but_no_collapse() {
    // Over 10,000 trials of 50 moves, the knight must revisit squares
    // (mean strictly below 51) but a random walk spreads out fast enough
    // that the mean stays well above a small fraction of the move count.
    let counts = run_seeded(10_000, 50, 4, 2024);
    let summary = Summary::from_sample(&counts).unwrap();

    assert!(
        summary.mean < 51.0,
        "mean {} shows no collisions at all",
        summary.mean
    );
    assert!(
        summary.mean > 10.0,
        "mean {} collapsed to near-zero distinct squares",
        summary.mean
    );
}

#[test]
fn test_unseeded_walks_vary() {
    // Two fresh entropy-seeded generators almost surely disagree somewhere
    // across a batch of long walks.
    let mut a = fastrand::Rng::new();
    let mut b = fastrand::Rng::new();
    let differs = (0..50).any(|_| simulate_walk(&mut a, 100) != simulate_walk(&mut b, 100));
    assert!(differs, "independent runs produced identical samples");
}

#[test]
fn test_confidence_interval_narrows_with_more_trials() {
    let small = Summary::from_sample(&run_seeded(1000, 50, 2, 8)).unwrap();
    let large = Summary::from_sample(&run_seeded(16_000, 50, 2, 8)).unwrap();

    let small_width = small.confidence_interval.1 - small.confidence_interval.0;
    let large_width = large.confidence_interval.1 - large.confidence_interval.0;
    assert!(
        large_width < small_width,
        "CI width {large_width} did not narrow from {small_width}"
    );
}
