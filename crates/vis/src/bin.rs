//! Histogram binning of continuous values.

use crate::scale;

/// One histogram bucket covering `[x0, x1)`, with the last bucket
/// also closed at `x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

/// Bucket boundaries over a fixed domain.
///
/// The boundaries are the round tick values inside the domain, so asking
/// for twelve buckets may yield a close-by count instead of exactly twelve.
/// Building the bins twice from the same domain and threshold count yields
/// identical boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    domain: (f64, f64),
    edges: Vec<f64>,
}

impl HistogramBins {
    pub fn new(domain: (f64, f64), threshold_count: usize) -> HistogramBins {
        let (d0, d1) = domain;
        let mut edges = vec![d0];

        for tick in scale::ticks(d0, d1, threshold_count) {
            if tick > d0 && tick < d1 {
                edges.push(tick);
            }
        }

        edges.push(d1);

        Self { domain, edges }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Counts the values per bucket. Values outside the domain, and NaN,
    /// are dropped.
    pub fn bin<I>(&self, values: I) -> Vec<Bin>
    where
        I: IntoIterator<Item = f64>,
    {
        let (d0, d1) = self.domain;
        let mut counts = vec![0_usize; self.edges.len() - 1];

        for value in values {
            if value.is_nan() || value < d0 || value > d1 {
                continue;
            }

            let bucket = self.edges.partition_point(|edge| *edge <= value) - 1;
            let bucket = bucket.min(counts.len() - 1);
            counts[bucket] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| Bin {
                x0: self.edges[i],
                x1: self.edges[i + 1],
                count,
            })
            .collect()
    }
}
