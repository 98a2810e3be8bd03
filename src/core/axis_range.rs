use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::primitives::{ensure_finite, saturate};
use crate::core::{DataBounds, TickGenerator};
use crate::error::{ChartError, ChartResult};

/// Default axis padding factor applied when the host does not configure one.
pub const DEFAULT_AXIS_PAD: f64 = 1.2;

/// Half-width of the window opened around a single repeated value, as a
/// fraction of that value's magnitude.
pub const DEGENERATE_HALF_SPAN_RATIO: f64 = 0.1;

/// Lower limit for the degenerate-range half-width.
pub const MIN_DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Padded, display-ready value-axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Builds a range; both ends must be finite and `min < max`.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        let min = ensure_finite(min, "axis min")?;
        let max = ensure_finite(max, "axis max")?;
        if min >= max {
            return Err(ChartError::InvalidData(format!(
                "axis range must have min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Resolves the value-axis range for `bounds` under padding factor `pad`.
///
/// `pad = 1` means no padding; larger values widen both ends by
/// `(pad - 1) / 2` of the data span. The tick heuristic is asked twice: first
/// with the raw extent, then, if the raw extent falls outside the padded
/// interior of that guess, with an explicitly widened interval so its own
/// rounding cannot clip real data.
///
/// A zero-width extent is first opened to a small window around the value.
pub fn resolve_range<T>(bounds: DataBounds, pad: f64, ticks: &T) -> ChartResult<AxisRange>
where
    T: TickGenerator + ?Sized,
{
    let Some((min, max)) = bounds.as_pair() else {
        return Err(ChartError::InvalidData(
            "cannot resolve an axis range from empty bounds".to_owned(),
        ));
    };
    ensure_finite(min, "bounds min")?;
    ensure_finite(max, "bounds max")?;
    if !pad.is_finite() || pad < 1.0 {
        return Err(ChartError::InvalidData(format!(
            "axis pad must be finite and >= 1, got {pad}"
        )));
    }

    let (min, max) = open_degenerate_extent(min.min(max), min.max(max));

    let first_guess = ticks.nice_bounds(min, max)?;

    let range = max - min;
    let pad_amount = (pad - 1.0) / 2.0 + 1.0;
    let test_min = min + range * (pad_amount - 1.0);
    let test_max = max - range * (pad_amount - 1.0);

    let (resolved_min, resolved_max) = if min < test_min || max > test_max {
        let widened_min = saturate(min - range * (pad_amount - 1.0));
        let widened_max = saturate(max + range * (pad_amount - 1.0));
        trace!(widened_min, widened_max, "axis range second guess");
        ticks.nice_bounds(widened_min, widened_max)?
    } else {
        trace!(
            first_min = first_guess.0,
            first_max = first_guess.1,
            "axis range first guess kept"
        );
        first_guess
    };

    AxisRange::new(resolved_min, resolved_max)
}

fn open_degenerate_extent(min: f64, max: f64) -> (f64, f64) {
    if min != max {
        return (min, max);
    }

    let half = (min.abs() * DEGENERATE_HALF_SPAN_RATIO).max(MIN_DEGENERATE_HALF_SPAN);
    warn!(value = min, half_span = half, "degenerate data range, opening window");
    // Near the f64 limits one side saturates; the other still opens.
    (saturate(min - half), saturate(max + half))
}
