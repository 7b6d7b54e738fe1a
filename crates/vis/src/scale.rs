//! Scale functions mapping data domains to visual ranges.
//!
//! A scale is built once from the dataset extent and stays fixed for the
//! lifetime of a chart. Degenerate domains, where both ends coincide, are
//! not special-cased: scaling through a zero-length domain produces NaN
//! positions.

use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDate;

/// A linear mapping from a numeric domain to a numeric range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Extends the domain ends to round tick values, so that the first and
    /// the last tick land on the domain boundaries.
    pub fn nice(self, count: usize) -> LinearScale {
        let (mut d0, mut d1) = self.domain;
        let mut prestep = 0.0;

        loop {
            let step = tick_increment(d0, d1, count);

            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }

            d0 = (d0 / step).floor() * step;
            d1 = (d1 / step).ceil() * step;
            prestep = step;
        }

        Self {
            domain: (d0, d1),
            range: self.range,
        }
    }

    /// Returns approximately `count` round values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        ticks(d0, d1, count)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A power-0.5 mapping, used for dot radii so that the dot area,
/// not the radius, tracks the data value.
#[derive(Debug, Clone, Copy)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SqrtScale {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        r0 + (value.sqrt() - d0.sqrt()) / (d1.sqrt() - d0.sqrt()) * (r1 - r0)
    }
}

/// A linear mapping from a date domain to a numeric range.
///
/// The radial charts use it with a `[0, 2π)` range, turning dates
/// into angles around the wheel.
#[derive(Debug, Clone, Copy)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> TimeScale {
        Self { domain, range }
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let length = (d1 - d0).num_days() as f64;
        let offset = (date - d0).num_days() as f64;

        r0 + offset / length * (r1 - r0)
    }

    /// Maps a range position back to the nearest date.
    pub fn invert(&self, position: f64) -> NaiveDate {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let length = (d1 - d0).num_days() as f64;
        let days = ((position - r0) / (r1 - r0) * length).round() as i64;

        d0 + Duration::days(days)
    }

    /// Returns the first day of every month within the domain.
    pub fn month_starts(&self) -> Vec<NaiveDate> {
        let (d0, d1) = self.domain;
        let mut year = d0.year();
        let mut month = d0.month();

        if d0.day() != 1 {
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        let mut starts = Vec::new();

        while let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            if date > d1 {
                break;
            }

            starts.push(date);
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        starts
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }
}

/// A fixed categorical lookup, e.g. precipitation type to dot color.
#[derive(Debug, Clone)]
pub struct OrdinalScale<K, V> {
    pairs: Vec<(K, V)>,
}

impl<K: PartialEq, V> OrdinalScale<K, V> {
    pub fn new(pairs: Vec<(K, V)>) -> OrdinalScale<K, V> {
        Self { pairs }
    }

    /// Unknown keys yield `None` rather than an implicit-domain entry.
    pub fn scale(&self, key: &K) -> Option<&V> {
        self.pairs
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }
}

/// Returns the minimum and the maximum of the values, skipping NaN.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| !value.is_nan())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Returns the maximum of the values, skipping NaN.
pub fn max<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    extent(values).map(|(_, max)| max)
}

/// Returns the arithmetic mean of the values, skipping NaN.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|value| !value.is_nan())
        .fold((0.0, 0_usize), |(sum, count), value| {
            (sum + value, count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Returns approximately `count` round values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop {
        return vec![start];
    }

    let step = tick_increment(start, stop, count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let first = (start / step).ceil() as i64;
    let last = (stop / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

/// Returns the tick step for the interval: a power of ten multiplied
/// by 1, 2 or 5, whichever lands closest to `(stop - start) / count`.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return f64::NAN;
    }

    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);

    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * 10_f64.powf(power)
}
