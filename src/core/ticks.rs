use serde::{Deserialize, Serialize};

use crate::core::primitives::{ensure_finite, saturate};
use crate::error::{ChartError, ChartResult};

/// Produces a "nice" rounded axis interval enclosing a requested one.
///
/// Axis range resolution only needs the rounded endpoints, so any closure
/// `Fn(f64, f64) -> (f64, f64)` also works as a generator.
pub trait TickGenerator {
    fn nice_bounds(&self, min: f64, max: f64) -> ChartResult<(f64, f64)>;
}

impl<F> TickGenerator for F
where
    F: Fn(f64, f64) -> (f64, f64),
{
    fn nice_bounds(&self, min: f64, max: f64) -> ChartResult<(f64, f64)> {
        Ok(self(min, max))
    }
}

/// Evenly spaced ticks produced by [`LinearTickGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceTicks {
    pub min: f64,
    pub max: f64,
    pub count: usize,
    pub interval: f64,
}

impl NiceTicks {
    /// Tick values from `min` to `max` inclusive.
    #[must_use]
    pub fn values(self) -> Vec<f64> {
        (0..self.count)
            .map(|index| self.min + index as f64 * self.interval)
            .collect()
    }

    /// Decimal places needed to label every tick without losing the interval.
    #[must_use]
    pub fn precision(self) -> usize {
        if self.interval >= 1.0 {
            return 0;
        }
        (-self.interval.log10() - 1e-9).ceil().max(0.0) as usize
    }
}

/// Linear 1-2-5 tick heuristic.
///
/// The interval is a multiple of a power of ten chosen from the range's
/// leading digits; endpoints snap outward to that interval, so zero is always
/// a tick when the range straddles it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTickGenerator {
    /// Values above 1 produce more, finer ticks (large plots); below 1 fewer,
    /// coarser ones.
    pub scale_factor: f64,
}

impl Default for LinearTickGenerator {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

impl LinearTickGenerator {
    #[must_use]
    pub fn with_scale_factor(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn generate(self, axis_min: f64, axis_max: f64) -> ChartResult<NiceTicks> {
        let mut low = ensure_finite(axis_min, "tick range min")?;
        let mut high = ensure_finite(axis_max, "tick range max")?;
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick scale factor must be finite and > 0".to_owned(),
            ));
        }

        // Equal endpoints: stretch toward zero, or to one when the value is zero.
        if low == high {
            high = if high != 0.0 { 0.0 } else { 1.0 };
        }
        if high < low {
            std::mem::swap(&mut low, &mut high);
        }

        let interval = best_linear_interval(high - low, self.scale_factor);
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "cannot derive a tick interval for range [{low:e}, {high:e}]"
            )));
        }

        let mut min = saturate((low / interval).floor() * interval);
        let mut max = saturate((high / interval).ceil() * interval);
        // Float rounding in floor/ceil must never clip the requested range.
        if min > low {
            min = saturate(min - interval);
        }
        if max < high {
            max = saturate(max + interval);
        }
        let count = ((max - min) / interval + 1.0).round() as usize;

        Ok(NiceTicks {
            min,
            max,
            count,
            interval,
        })
    }
}

impl TickGenerator for LinearTickGenerator {
    fn nice_bounds(&self, min: f64, max: f64) -> ChartResult<(f64, f64)> {
        let ticks = self.generate(min, max)?;
        Ok((ticks.min, ticks.max))
    }
}

fn best_linear_interval(range: f64, scale_factor: f64) -> f64 {
    let magnitude = 10f64.powf(range.log10().floor());
    // 1 <= f < 10 before scaling.
    let f = range / magnitude / scale_factor;

    let fact = if f <= 0.38 {
        0.1
    } else if f <= 1.6 {
        0.2
    } else if f <= 4.0 {
        0.5
    } else if f <= 8.0 {
        1.0
    } else if f <= 16.0 {
        2.0
    } else {
        5.0
    };

    fact * magnitude
}
