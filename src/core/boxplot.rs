use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::sample::Outliers;
use crate::core::{AxisMapping, Sample};
use crate::error::{ChartError, ChartResult};

/// Upper limit for automatically sized boxes.
pub const DEFAULT_BOX_MAX_WIDTH_PX: f64 = 100.0;

/// Share of the per-sample slot an automatically sized box occupies.
pub const AUTO_BOX_WIDTH_FRACTION: f64 = 0.6;

/// Smallest width a box (or its stroke-compensated interior) is drawn with.
pub const MIN_BOX_WIDTH_PX: f64 = 1.0;

/// Box width policy: sized from the plot width, or a fixed pixel width.
///
/// Serializes as `"auto"` or a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoxWidth {
    #[default]
    Auto,
    Fixed(f64),
}

impl Serialize for BoxWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(width_px) => serializer.serialize_f64(*width_px),
        }
    }
}

impl<'de> Deserialize<'de> for BoxWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pixels(f64),
            Keyword(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Pixels(width_px) => Ok(Self::Fixed(width_px)),
            Repr::Keyword(keyword) if keyword.eq_ignore_ascii_case("auto") => Ok(Self::Auto),
            Repr::Keyword(other) => Err(D::Error::custom(format!(
                "box width must be \"auto\" or a number, got \"{other}\""
            ))),
        }
    }
}

/// Automatic box width: `min(max_width, 0.6 * plot_width / sample_count)`.
///
/// Many samples give narrower boxes; the cap keeps a lone sample from
/// spanning the plot. Zero samples yield the cap.
#[must_use]
pub fn auto_box_width_px(max_width_px: f64, plot_width_px: f64, sample_count: usize) -> f64 {
    if sample_count == 0 {
        return max_width_px;
    }
    (AUTO_BOX_WIDTH_FRACTION * plot_width_px / sample_count as f64).min(max_width_px)
}

/// Resolves the nominal box width for a draw pass, clamped to a visible width.
#[must_use]
pub fn resolve_box_width_px(
    policy: BoxWidth,
    max_width_px: f64,
    plot_width_px: f64,
    sample_count: usize,
) -> f64 {
    let requested = match policy {
        BoxWidth::Auto => auto_box_width_px(max_width_px, plot_width_px, sample_count),
        BoxWidth::Fixed(width_px) => width_px,
    };
    clamp_box_width(requested)
}

fn clamp_box_width(width_px: f64) -> f64 {
    if width_px.is_finite() && width_px >= MIN_BOX_WIDTH_PX {
        return width_px;
    }
    warn!(
        requested = width_px,
        clamped = MIN_BOX_WIDTH_PX,
        "box width clamped to minimum visible width"
    );
    MIN_BOX_WIDTH_PX
}

/// Pixel geometry of one box-and-whisker glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub center_x: f64,
    pub min_y: f64,
    pub q1_y: f64,
    pub median_y: f64,
    pub q3_y: f64,
    pub max_y: f64,
    /// Horizontal extent of the min/max end caps.
    pub end_cap_left: f64,
    pub end_cap_right: f64,
    /// Horizontal extent of the box and median tick, inside the stroke.
    pub box_left: f64,
    pub box_right: f64,
    pub box_top: f64,
    pub box_height: f64,
    pub outlier_ys: Outliers,
}

impl BoxGeometry {
    #[must_use]
    pub fn end_cap_width(&self) -> f64 {
        self.end_cap_right - self.end_cap_left
    }

    #[must_use]
    pub fn box_width(&self) -> f64 {
        self.box_right - self.box_left
    }
}

/// Projects one sample into pixel geometry.
///
/// End caps span half the nominal box width. The box and median tick use the
/// nominal width minus one stroke on each side so neighbouring outlines do
/// not overlap. Box height is taken as an absolute pixel distance, so either
/// y-axis direction works.
pub fn project_box<X, Y>(
    sample: &Sample,
    x_map: &X,
    y_map: &Y,
    box_width_px: f64,
    line_width: f64,
) -> ChartResult<BoxGeometry>
where
    X: AxisMapping + ?Sized,
    Y: AxisMapping + ?Sized,
{
    if !line_width.is_finite() || line_width < 0.0 {
        return Err(ChartError::InvalidData(
            "line width must be finite and >= 0".to_owned(),
        ));
    }
    if !sample.is_ordered() {
        debug!(
            position = sample.position,
            "sample five-number summary is not ordered"
        );
    }

    let nominal_width = clamp_box_width(box_width_px);
    let end_cap_half = nominal_width / 4.0;
    // Narrow boxes routinely lose their interior to the stroke; clamp quietly.
    let inner_half = (nominal_width - 2.0 * line_width).max(MIN_BOX_WIDTH_PX) / 2.0;

    let center_x = mapped(x_map.to_pixel(sample.position), "position")?;
    let min_y = mapped(y_map.to_pixel(sample.min), "min")?;
    let q1_y = mapped(y_map.to_pixel(sample.q1), "q1")?;
    let median_y = mapped(y_map.to_pixel(sample.median), "median")?;
    let q3_y = mapped(y_map.to_pixel(sample.q3), "q3")?;
    let max_y = mapped(y_map.to_pixel(sample.max), "max")?;
    let outlier_ys = sample
        .outliers
        .iter()
        .map(|&value| mapped(y_map.to_pixel(value), "outlier"))
        .collect::<ChartResult<Outliers>>()?;

    Ok(BoxGeometry {
        center_x,
        min_y,
        q1_y,
        median_y,
        q3_y,
        max_y,
        end_cap_left: center_x - end_cap_half,
        end_cap_right: center_x + end_cap_half,
        box_left: center_x - inner_half,
        box_right: center_x + inner_half,
        box_top: q3_y.min(q1_y),
        box_height: (q1_y - q3_y).abs(),
        outlier_ys,
    })
}

/// Projects every sample in input order.
pub fn project_boxes<X, Y>(
    samples: &[Sample],
    x_map: &X,
    y_map: &Y,
    box_width_px: f64,
    line_width: f64,
) -> ChartResult<Vec<BoxGeometry>>
where
    X: AxisMapping + ?Sized,
    Y: AxisMapping + ?Sized,
{
    samples
        .iter()
        .map(|sample| project_box(sample, x_map, y_map, box_width_px, line_width))
        .collect()
}

/// Parallel variant of [`project_boxes`]; output order matches input order.
#[cfg(feature = "parallel-projection")]
pub fn par_project_boxes<X, Y>(
    samples: &[Sample],
    x_map: &X,
    y_map: &Y,
    box_width_px: f64,
    line_width: f64,
) -> ChartResult<Vec<BoxGeometry>>
where
    X: AxisMapping + Sync + ?Sized,
    Y: AxisMapping + Sync + ?Sized,
{
    samples
        .par_iter()
        .map(|sample| project_box(sample, x_map, y_map, box_width_px, line_width))
        .collect()
}

fn mapped(pixel: f64, field_name: &str) -> ChartResult<f64> {
    if pixel.is_finite() {
        Ok(pixel)
    } else {
        Err(ChartError::InvalidData(format!(
            "mapped {field_name} pixel must be finite"
        )))
    }
}
