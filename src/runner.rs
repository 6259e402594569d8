//! Trial orchestration: fan a batch of independent walks out across
//! worker threads and collect the per-trial distinct-square counts.
//!
//! Every trial is side-effect-free, so the batch is embarrassingly
//! parallel. The trial count is pre-partitioned across a fixed set of
//! workers; each worker owns a [`fastrand::Rng`] forked from a single
//! master generator and fills a private result buffer. Buffers are merged
//! after all workers join, so no synchronization happens on the hot path.

use std::thread;

use anyhow::{Result, ensure};
use fastrand::Rng;

use crate::constants::{DEFAULT_MOVES, DEFAULT_SIMULATIONS, TRIALS_PER_WORKER_FLOOR};
use crate::walk::simulate_walk;

/// Configuration for one simulation run.
///
/// Validated up front by [`RunConfig::validate`]; a config that passes
/// validation cannot fail later in the run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of independent trials.
    pub simulations: u64,
    /// Number of moves per trial.
    pub moves: usize,
    /// Worker thread count. `None` picks a count from the machine's
    /// parallelism and the trial count.
    pub workers: Option<usize>,
    /// Master RNG seed. `None` seeds from entropy; a fixed value makes
    /// the whole run reproducible.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulations: DEFAULT_SIMULATIONS,
            moves: DEFAULT_MOVES,
            workers: None,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Check the configuration before any work starts.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.simulations > 0, "number of simulations must be positive");
        if let Some(workers) = self.workers {
            ensure!(workers > 0, "worker count must be positive");
        }
        Ok(())
    }

    /// Resolve the worker count: the explicit setting if given, otherwise
    /// one worker per available core, capped so that each worker has at
    /// least [`TRIALS_PER_WORKER_FLOOR`] trials to justify its thread.
    pub fn resolved_workers(&self) -> usize {
        if let Some(workers) = self.workers {
            return workers;
        }
        let cores = thread::available_parallelism().map_or(1, |n| n.get());
        let by_load = (self.simulations / TRIALS_PER_WORKER_FLOOR) as usize;
        cores.min(by_load).max(1)
    }
}

/// The collected result of a run: one distinct-square count per trial.
///
/// The full sample is materialized so that both the summary statistics
/// and the histogram can be computed from it.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Per-trial distinct-square counts, in no particular order.
    pub counts: Vec<u32>,
    /// Worker threads actually used.
    pub workers: usize,
}

/// Run the configured batch of walks and collect all per-trial counts.
///
/// Trials are split as evenly as possible across the workers; the first
/// `simulations % workers` workers take one extra trial. Each worker's
/// RNG is forked from the master generator, so a fixed [`RunConfig::seed`]
/// reproduces the entire sample (up to the per-worker partition, which is
/// itself deterministic).
pub fn run_simulations(config: &RunConfig) -> Result<RunOutcome> {
    config.validate()?;

    let workers = config.resolved_workers();
    let mut master = match config.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    let base = config.simulations / workers as u64;
    let extra = (config.simulations % workers as u64) as usize;
    let moves = config.moves;

    let mut counts = Vec::with_capacity(config.simulations as usize);
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let share = base + u64::from(worker < extra);
            let mut rng = master.fork();
            handles.push(scope.spawn(move || {
                let mut buf = Vec::with_capacity(share as usize);
                for _ in 0..share {
                    buf.push(simulate_walk(&mut rng, moves) as u32);
                }
                buf
            }));
        }
        for handle in handles {
            // A worker only panics if the walk itself does, which it cannot.
            match handle.join() {
                Ok(buf) => counts.extend(buf),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    Ok(RunOutcome { counts, workers })
}
