//! Scales map a data-space domain onto a pixel-space range.
//!
//! All scale domains are computed once from the full dataset; there is no
//! incremental update. An empty dataset degenerates every scale to a
//! constant-zero mapping instead of failing.

/// A linear scale over `[0, max]` with an inverted range `[height, 0]`,
/// so that larger values map to smaller pixel y coordinates.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    max: f64,
    height: f64,
}

impl LinearScale {
    /// Builds the scale from the true maximum of `values`; an empty
    /// iterator degenerates the domain to `[0, 0]`.
    pub fn from_values<I>(values: I, height: f64) -> LinearScale
    where
        I: IntoIterator<Item = f64>,
    {
        let max = values.into_iter().fold(0.0, f64::max);

        Self { max, height }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn position(&self, value: f64) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }

        self.height - value / self.max * self.height
    }
}

/// A continuous scale over `[min, max]` with range `[0, length]`.
///
/// Both scatterplot axes use it: calendar years on x and race seconds
/// on y. The range is not inverted; slower times plot lower, as on the
/// source chart.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    min: f64,
    max: f64,
    length: f64,
}

impl TimeScale {
    pub fn new(min: f64, max: f64, length: f64) -> TimeScale {
        Self { min, max, length }
    }

    /// Builds the scale from the extent of `values`; an empty iterator
    /// degenerates the domain to `[0, 0]`.
    pub fn from_values<I>(values: I, length: f64) -> TimeScale
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values.into_iter().fold(None, |extent, value| {
            let (min, max) = extent.unwrap_or((value, value));
            Some((f64::min(min, value), f64::max(max, value)))
        }).unwrap_or((0.0, 0.0));

        Self { min, max, length }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }

        (value - self.min) / span * self.length
    }
}

/// A categorical band scale: the range `[0, width]` is partitioned into
/// equal-width slots, one per distinct key in first-seen order, with a
/// fractional padding between bands.
#[derive(Clone, Debug)]
pub struct BandScale {
    keys: Vec<String>,
    step: f64,
    start: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds the scale from the category keys in first-seen order;
    /// duplicate keys collapse onto the first occurrence.
    pub fn new<I>(keys: I, width: f64, padding: f64) -> BandScale
    where
        I: IntoIterator<Item = String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for key in keys {
            if !distinct.contains(&key) {
                distinct.push(key);
            }
        }

        let n = distinct.len() as f64;
        if distinct.is_empty() {
            return Self { keys: distinct, step: 0.0, start: 0.0, bandwidth: 0.0 };
        }

        // Band placement follows the d3 convention with equal inner and
        // outer padding and center alignment.
        let step = width / f64::max(1.0, n + padding);
        let start = (width - step * (n - padding)) / 2.0;
        let bandwidth = step * (1.0 - padding);

        Self { keys: distinct, step, start, bandwidth }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// The left edge of the band for `key`, or `None` for a key outside
    /// the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|index| self.start + self.step * index as f64)
    }
}
