//! Fixed-range, equal-width binning for the distribution panels.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Distance from an edge, in bin widths, still treated as on the edge
const EDGE_TOLERANCE: f64 = 1e-9;

/// Binned counts of a numeric series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Lower and upper edge of the binned range
    pub range: (f64, f64),
    /// Count per bin, left to right
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins over `range`.
    ///
    /// The upper edge belongs to the last bin. Out-of-range values are
    /// clamped into the edge bins; NaN is skipped.
    pub fn new(values: &[f64], range: Range<f64>, bins: usize) -> Self {
        let bins = bins.max(1);
        let mut histogram = Self {
            range: (range.start, range.end),
            counts: vec![0; bins],
        };

        for &value in values.iter().filter(|v| !v.is_nan()) {
            let index = histogram.bin_index(value);
            histogram.counts[index] += 1;
        }

        histogram
    }

    /// Bin holding `value`, clamped to the edge bins.
    ///
    /// A value within `EDGE_TOLERANCE` bin widths of an edge counts as on
    /// it, so `0.3` opens the `[0.3, 0.4)` bin despite rounding.
    fn bin_index(&self, value: f64) -> usize {
        let last = self.bins() - 1;
        let (start, end) = self.range;
        let span = end - start;
        if span <= 0.0 {
            return 0;
        }

        let scaled = (value - start) * self.bins() as f64 / span;
        let nearest = scaled.round();
        let index = if (scaled - nearest).abs() < EDGE_TOLERANCE {
            nearest
        } else {
            scaled.floor()
        };
        index.clamp(0.0, last as f64) as usize
    }

    /// Number of bins
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Width of a single bin
    pub fn bin_width(&self) -> f64 {
        (self.range.1 - self.range.0) / self.bins() as f64
    }

    /// Lower and upper edge of bin `index`
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        let (start, end) = self.range;
        let bins = self.bins() as f64;
        let edge = |i: usize| start + (end - start) * i as f64 / bins;
        (edge(index), edge(index + 1))
    }

    /// Largest bin count
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total of all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bins_over_fixed_range() {
        let hist = Histogram::new(&[-1.0, -0.95, 0.0, 0.05, 1.0], -1.0..1.0, 10);

        assert_eq!(hist.bins(), 10);
        assert_eq!(hist.counts[0], 2);
        assert_eq!(hist.counts[5], 2);
        // upper edge lands in the last bin
        assert_eq!(hist.counts[9], 1);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_out_of_range_and_nan() {
        let hist = Histogram::new(&[-3.0, 2.0, f64::NAN], 0.0..1.0, 10);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[9], 1);
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_interior_edges_open_their_bin() {
        let hist = Histogram::new(&[0.3, 0.6, 0.7], 0.0..1.0, 10);
        assert_eq!(hist.counts, vec![0, 0, 0, 1, 0, 0, 1, 1, 0, 0]);

        let polarity = Histogram::new(&[-0.6, 0.2, 0.6], -1.0..1.0, 10);
        assert_eq!(polarity.counts[2], 1);
        assert_eq!(polarity.counts[6], 1);
        assert_eq!(polarity.counts[8], 1);
    }

    #[test]
    fn test_every_edge_value() {
        for i in 0..10 {
            let value = i as f64 / 10.0;
            let hist = Histogram::new(&[value], 0.0..1.0, 10);
            assert_eq!(hist.counts[i], 1, "{value} belongs to bin {i}");
        }
    }

    #[test]
    fn test_just_below_edge_stays_low() {
        let hist = Histogram::new(&[0.3 - 1e-6, 0.6 - 1e-6], 0.0..1.0, 10);
        assert_eq!(hist.counts[2], 1);
        assert_eq!(hist.counts[5], 1);
    }

    #[test]
    fn test_empty_series() {
        let hist = Histogram::new(&[], 0.0..1.0, 10);
        assert_eq!(hist.counts, vec![0; 10]);
        assert_eq!(hist.max_count(), 0);
    }

    #[test]
    fn test_bin_edges() {
        let hist = Histogram::new(&[], -1.0..1.0, 10);
        let (lower, upper) = hist.bin_edges(3);
        assert_abs_diff_eq!(lower, -0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(upper, -0.2, epsilon = 1e-12);
    }
}
