//! Summary statistics over a sample of per-trial counts.

use anyhow::{Result, ensure};

use crate::constants::CONFIDENCE_Z;

/// Summary of one run's sample of distinct-square counts.
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 95% confidence interval for the mean, as (low, high).
    pub confidence_interval: (f64, f64),
    /// Smallest observed count.
    pub min: u32,
    /// Largest observed count.
    pub max: u32,
}

impl Summary {
    /// Compute the summary of a non-empty sample.
    pub fn from_sample(sample: &[u32]) -> Result<Self> {
        ensure!(!sample.is_empty(), "cannot summarize an empty sample");

        let n = sample.len() as f64;
        let mean = sample.iter().map(|&c| f64::from(c)).sum::<f64>() / n;
        let variance = sample
            .iter()
            .map(|&c| {
                let d = f64::from(c) - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        let half_width = CONFIDENCE_Z * std_dev / n.sqrt();
        let min = sample.iter().copied().min().unwrap_or(0);
        let max = sample.iter().copied().max().unwrap_or(0);

        Ok(Self {
            mean,
            std_dev,
            confidence_interval: (mean - half_width, mean + half_width),
            min,
            max,
        })
    }
}
