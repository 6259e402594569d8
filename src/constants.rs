//! Constants for the knight move table, run defaults, and reporting.
//!
//! This module collects all fixed parameters of the simulator: the move
//! offsets that define the knight, the default run configuration matching
//! the reference tool, and the geometry of the text histogram.

// =============================================================================
// Knight Geometry
// =============================================================================

/// The 8 legal knight displacements on the lattice, as (dx, dy).
///
/// On an unbounded board every one of these is always playable, so no
/// legality filtering beyond this table ever happens.
pub const KNIGHT_MOVES: [(i64, i64); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

// =============================================================================
// Run Defaults
// =============================================================================

/// Default number of independent trials per run.
pub const DEFAULT_SIMULATIONS: u64 = 1_000_000;

/// Default number of moves per trial.
pub const DEFAULT_MOVES: usize = 50;

/// Default output file for the distribution plot.
pub const DEFAULT_OUTPUT: &str = "simulation_results.txt";

/// Trials below this threshold per worker are not worth a thread;
/// the worker-count heuristic divides by it.
pub const TRIALS_PER_WORKER_FLOOR: u64 = 1000;

// =============================================================================
// Statistics
// =============================================================================

/// Two-sided z-value for the 95% confidence interval on the mean.
pub const CONFIDENCE_Z: f64 = 1.96;

// =============================================================================
// Histogram Geometry
// =============================================================================

/// Maximum number of histogram bins.
pub const HISTOGRAM_BINS: usize = 50;

/// Width of the longest histogram bar, in characters.
pub const HISTOGRAM_BAR_WIDTH: usize = 60;
