//! Knight-Walk: a Monte Carlo estimator for knight random walks.
//!
//! This crate estimates the expected number of distinct squares a knight
//! visits after a fixed number of random moves on an unbounded chessboard,
//! by running many independent trials and summarizing the results.
//!
//! ## Modules
//!
//! - [`constants`] - Move table, run defaults, and reporting parameters
//! - [`walk`] - The core single-walk simulation primitive
//! - [`runner`] - Trial orchestration across worker threads
//! - [`stats`] - Summary statistics over the collected sample
//! - [`histogram`] - Text rendering of the count distribution
//!
//! ## Example
//!
//! ```
//! use knight_walk::runner::{RunConfig, run_simulations};
//! use knight_walk::stats::Summary;
//!
//! // Run a small, reproducible batch of trials
//! let config = RunConfig {
//!     simulations: 10_000,
//!     moves: 50,
//!     seed: Some(42),
//!     ..RunConfig::default()
//! };
//! let outcome = run_simulations(&config).unwrap();
//!
//! // Summarize the distinct-square counts
//! let summary = Summary::from_sample(&outcome.counts).unwrap();
//! println!("mean distinct squares: {:.2}", summary.mean);
//! ```

pub mod constants;
pub mod histogram;
pub mod runner;
pub mod stats;
pub mod walk;
