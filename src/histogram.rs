//! Text histogram of the distinct-square-count distribution.
//!
//! Counts are integers in a narrow range, so the histogram bins the value
//! range `[min, max]` into at most [`HISTOGRAM_BINS`] equal-width bins and
//! renders each bin as a proportional bar. The rendering is plain text and
//! is written to the run's output file.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::{HISTOGRAM_BAR_WIDTH, HISTOGRAM_BINS};

/// A binned view of a sample of per-trial counts.
#[derive(Clone, Debug)]
pub struct Histogram {
    /// Per-bin trial frequencies.
    bins: Vec<u64>,
    /// Lowest value covered (inclusive).
    lo: u32,
    /// Highest value covered (inclusive).
    hi: u32,
}

impl Histogram {
    /// Bin a non-empty sample. Returns `None` for an empty sample.
    pub fn build(sample: &[u32]) -> Option<Self> {
        let lo = sample.iter().copied().min()?;
        let hi = sample.iter().copied().max()?;

        // Never more bins than distinct integer values in the range.
        let span = (hi - lo + 1) as usize;
        let nbins = span.min(HISTOGRAM_BINS);

        let mut bins = vec![0u64; nbins];
        for &value in sample {
            // Map value into [0, nbins); hi lands in the last bin.
            let idx = ((value - lo) as usize * nbins) / span;
            bins[idx] += 1;
        }

        Some(Self { bins, lo, hi })
    }

    /// Inclusive value range `[lo, hi]` covered by bin `idx`.
    fn bin_range(&self, idx: usize) -> (u32, u32) {
        let span = (self.hi - self.lo + 1) as usize;
        let nbins = self.bins.len();
        let start = self.lo + (idx * span).div_ceil(nbins) as u32;
        let end = self.lo + ((idx + 1) * span).div_ceil(nbins) as u32 - 1;
        (start, end)
    }

    /// Render the histogram as a text plot with proportional bars.
    pub fn render(&self, title: &str) -> String {
        let peak = self.bins.iter().copied().max().unwrap_or(0).max(1);
        let total: u64 = self.bins.iter().sum();

        let mut out = String::new();
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "trials: {total}, range: [{}, {}]", self.lo, self.hi);
        let _ = writeln!(out);

        for (idx, &freq) in self.bins.iter().enumerate() {
            let (start, end) = self.bin_range(idx);
            let bar_len = ((freq as u128 * HISTOGRAM_BAR_WIDTH as u128) / peak as u128) as usize;
            let bar: String = "#".repeat(bar_len);
            if start == end {
                let _ = writeln!(out, "{start:>7}         | {bar} {freq}");
            } else {
                let _ = writeln!(out, "{start:>7}-{end:<7} | {bar} {freq}");
            }
        }

        out
    }

    /// Render the histogram and write it to `path`.
    pub fn save(&self, path: &Path, title: &str) -> Result<()> {
        fs::write(path, self.render(title))
            .with_context(|| format!("failed to write histogram to {}", path.display()))
    }
}
