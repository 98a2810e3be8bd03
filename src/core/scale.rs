use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::core::AxisRange;
use crate::error::{ChartError, ChartResult};

/// Unit-to-pixel transform supplied by a host axis.
///
/// Any `Fn(f64) -> f64` closure is a mapping, so hosts with their own axis
/// objects can pass `|unit| axis.u2p(unit)` directly.
pub trait AxisMapping {
    fn to_pixel(&self, unit: f64) -> f64;
}

impl<F> AxisMapping for F
where
    F: Fn(f64) -> f64,
{
    fn to_pixel(&self, unit: f64) -> f64 {
        self(unit)
    }
}

/// Linear axis mapping a value domain onto a pixel span.
///
/// The pixel span may run backwards; vertical axes on a top-down canvas map
/// the domain minimum to the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearAxis {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearAxis {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "axis domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "axis pixel span must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    /// Category axis spanning the viewport from left to right.
    pub fn horizontal(domain_start: f64, domain_end: f64, viewport: Viewport) -> ChartResult<Self> {
        validate_viewport(viewport)?;
        Self::new(domain_start, domain_end, 0.0, viewport.width_px())
    }

    /// Value axis for a resolved range, minimum at the bottom edge.
    pub fn vertical(range: AxisRange, viewport: Viewport) -> ChartResult<Self> {
        validate_viewport(viewport)?;
        Self::new(range.min, range.max, viewport.height_px(), 0.0)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_span(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let pixel_span = self.pixel_end - self.pixel_start;
        if pixel_span == 0.0 {
            return Err(ChartError::InvalidData(
                "axis pixel span is empty".to_owned(),
            ));
        }

        let normalized = (pixel - self.pixel_start) / pixel_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

impl AxisMapping for LinearAxis {
    fn to_pixel(&self, unit: f64) -> f64 {
        self.domain_to_pixel(unit)
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}
