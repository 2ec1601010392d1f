//! Summary statistics over the rounds each session needed.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// An odd sample has a middle session; an even one averages the middle pair
/// and always prints with a decimal (`38.0`, `38.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Median {
    Odd(u32),
    Even(f64),
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Odd(value) => write!(f, "{value}"),
            Median::Even(value) => write!(f, "{value:.1}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub sessions: usize,
    pub mean: f64,
    pub median: Median,
    /// Sample standard deviation; 0 for a single session.
    pub std_dev: f64,
    /// Every value sharing the highest frequency, in order of first appearance.
    pub modes: Vec<u32>,
    pub max: u32,
    pub min: u32,
}

impl Summary {
    pub fn from_rounds(rounds: &[u32]) -> Result<Self> {
        if rounds.is_empty() {
            return Err(Error::EmptySample);
        }
        let n = rounds.len() as f64;
        let mut sorted = rounds.to_vec();
        sorted.sort_unstable();

        let sum: f64 = sorted.iter().map(|&r| r as f64).sum();
        let mean = sum / n;
        let std_dev = if sorted.len() < 2 {
            0.0
        } else {
            let variance = sorted
                .iter()
                .map(|&r| (r as f64 - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0);
            variance.sqrt()
        };

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            Median::Odd(sorted[mid])
        } else {
            Median::Even((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
        };

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &r in rounds {
            *counts.entry(r).or_default() += 1;
        }
        let top = counts.values().copied().max().unwrap_or(0);
        let mut modes: Vec<u32> = Vec::new();
        for &r in rounds {
            if counts[&r] == top && !modes.contains(&r) {
                modes.push(r);
            }
        }

        Ok(Summary {
            sessions: sorted.len(),
            mean,
            median,
            std_dev,
            modes,
            max: sorted[sorted.len() - 1],
            min: sorted[0],
        })
    }

    pub fn mode_label(&self) -> String {
        match self.modes.as_slice() {
            [single] => single.to_string(),
            many => format!(
                "[{}]",
                many.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

/// Unit-width frequency table starting at 1: `counts[k]` is how many sessions
/// took `k + 1` rounds. Runs through the largest value seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub counts: Vec<u32>,
}

impl Histogram {
    pub fn from_rounds(rounds: &[u32]) -> Self {
        let max = rounds.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0u32; max];
        for &r in rounds {
            if r >= 1 {
                counts[r as usize - 1] += 1;
            }
        }
        Histogram { counts }
    }

    /// (rounds, frequency) for every bucket.
    pub fn bins(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u32 + 1, count))
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn peak(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_is_an_error() {
        assert_eq!(Summary::from_rounds(&[]), Err(Error::EmptySample));
    }

    #[test]
    fn odd_sample() {
        let summary = Summary::from_rounds(&[7, 3, 5, 3, 12]).unwrap();
        assert_eq!(summary.sessions, 5);
        assert!((summary.mean - 6.0).abs() < 1e-9);
        assert_eq!(summary.median, Median::Odd(5));
        assert_eq!(summary.modes, vec![3]);
        assert_eq!(summary.mode_label(), "3");
        assert_eq!(summary.max, 12);
        assert_eq!(summary.min, 3);
        // squares: 1 9 1 9 36 = 56, / 4 = 14
        assert!((summary.std_dev - 14f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn even_sample_median() {
        let summary = Summary::from_rounds(&[4, 9, 3, 10]).unwrap();
        assert_eq!(summary.median, Median::Even(6.5));
        assert_eq!(summary.median.to_string(), "6.5");
        let summary = Summary::from_rounds(&[4, 8, 3, 10]).unwrap();
        assert_eq!(summary.median, Median::Even(6.0));
        assert_eq!(summary.median.to_string(), "6.0");
    }

    #[test]
    fn several_modes() {
        let summary = Summary::from_rounds(&[9, 4, 4, 9, 6]).unwrap();
        assert_eq!(summary.modes, vec![9, 4]);
        assert_eq!(summary.mode_label(), "[9, 4]");
    }

    #[test]
    fn single_session() {
        let summary = Summary::from_rounds(&[8]).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.median, Median::Odd(8));
        assert_eq!(summary.modes, vec![8]);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn histogram_is_unit_width_from_one() {
        let histogram = Histogram::from_rounds(&[3, 5, 3, 4, 3]);
        assert_eq!(histogram.counts, vec![0, 0, 3, 1, 1]);
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.peak(), 3);
        let bins: Vec<(u32, u32)> = histogram.bins().collect();
        assert_eq!(bins[0], (1, 0));
        assert_eq!(bins[2], (3, 3));
        assert_eq!(bins[4], (5, 1));
    }

    #[test]
    fn empty_histogram() {
        let histogram = Histogram::from_rounds(&[]);
        assert!(histogram.counts.is_empty());
        assert_eq!(histogram.peak(), 0);
    }
}
