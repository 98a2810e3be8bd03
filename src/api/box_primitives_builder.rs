use crate::core::{AxisMapping, BoxGeometry, Sample, project_box};
use crate::error::ChartResult;
use crate::render::{BoxPrimitive, MarkerPrimitive, MarkerShape, RectPrimitive, SegmentPrimitive};

use super::BoxplotOptions;

/// Stroke and marker settings applied while turning geometry into primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPrimitiveStyle {
    pub line_width: f64,
    pub marker_size_px: f64,
    pub marker_shape: MarkerShape,
    pub marker_shadow: bool,
}

impl BoxPrimitiveStyle {
    #[must_use]
    pub fn from_options(options: &BoxplotOptions) -> Self {
        Self {
            line_width: options.line_width,
            marker_size_px: options.marker_size,
            marker_shape: options.outlier_marker_shape,
            marker_shadow: options.shadow,
        }
    }
}

impl Default for BoxPrimitiveStyle {
    fn default() -> Self {
        Self::from_options(&BoxplotOptions::default())
    }
}

/// Emits one glyph's primitives in draw order: whiskers, end caps, median
/// tick, box outline, then outlier markers.
///
/// Outlier markers are always filled; hollow markers read poorly once a
/// shadow is drawn under them.
#[must_use]
pub fn box_primitives(geometry: &BoxGeometry, style: BoxPrimitiveStyle) -> Vec<BoxPrimitive> {
    let x = geometry.center_x;
    let stroke = style.line_width;
    let mut out = Vec::with_capacity(6 + geometry.outlier_ys.len());

    out.push(BoxPrimitive::Segment(SegmentPrimitive::new(
        x,
        geometry.min_y,
        x,
        geometry.q1_y,
        stroke,
    )));
    out.push(BoxPrimitive::Segment(SegmentPrimitive::new(
        x,
        geometry.q3_y,
        x,
        geometry.max_y,
        stroke,
    )));

    for cap_y in [geometry.min_y, geometry.max_y] {
        out.push(BoxPrimitive::Segment(SegmentPrimitive::new(
            geometry.end_cap_left,
            cap_y,
            geometry.end_cap_right,
            cap_y,
            stroke,
        )));
    }

    out.push(BoxPrimitive::Segment(SegmentPrimitive::new(
        geometry.box_left,
        geometry.median_y,
        geometry.box_right,
        geometry.median_y,
        stroke,
    )));

    out.push(BoxPrimitive::Rect(RectPrimitive::new(
        geometry.box_left,
        geometry.box_top,
        geometry.box_width(),
        geometry.box_height,
        stroke,
    )));

    out.extend(geometry.outlier_ys.iter().map(|&y| {
        BoxPrimitive::Marker(MarkerPrimitive {
            x,
            y,
            shape: style.marker_shape,
            size_px: style.marker_size_px,
            filled: true,
            shadow: style.marker_shadow,
        })
    }));

    out
}

/// Lays out one sample straight to primitives.
pub fn layout_sample<X, Y>(
    sample: &Sample,
    x_map: &X,
    y_map: &Y,
    box_width_px: f64,
    style: BoxPrimitiveStyle,
) -> ChartResult<Vec<BoxPrimitive>>
where
    X: AxisMapping + ?Sized,
    Y: AxisMapping + ?Sized,
{
    let geometry = project_box(sample, x_map, y_map, box_width_px, style.line_width)?;
    Ok(box_primitives(&geometry, style))
}
