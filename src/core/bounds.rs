use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Raw value extent of a sample set before any axis padding.
///
/// Both ends stay `None` until the first value is seen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DataBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DataBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.min.is_none() || self.max.is_none()
    }

    /// Returns `(min, max)` once both ends are known.
    #[must_use]
    pub fn as_pair(self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }

    #[must_use]
    pub fn span(self) -> Option<f64> {
        self.as_pair().map(|(min, max)| max - min)
    }

    fn lower_to(&mut self, value: f64) {
        if self.min.is_none_or(|current| value < current) {
            self.min = Some(value);
        }
    }

    fn raise_to(&mut self, value: f64) {
        if self.max.is_none_or(|current| value > current) {
            self.max = Some(value);
        }
    }

    /// Widens both ends so `value` is inside the bounds.
    pub fn include(&mut self, value: f64) {
        self.lower_to(value);
        self.raise_to(value);
    }
}

/// Scans samples for the smallest and largest plotted value.
///
/// The lower end considers each sample's `min`, the upper end its `max`, and
/// every outlier may widen either end. An empty slice yields empty bounds.
#[must_use]
pub fn compute_bounds(samples: &[Sample]) -> DataBounds {
    let mut bounds = DataBounds::default();
    for sample in samples {
        bounds.lower_to(sample.min);
        bounds.raise_to(sample.max);
        for &outlier in &sample.outliers {
            bounds.include(outlier);
        }
    }
    bounds
}
