use serde::{Deserialize, Serialize};

use crate::api::highlighter::HighlighterOptions;
use crate::core::{BoxWidth, DEFAULT_AXIS_PAD, DEFAULT_BOX_MAX_WIDTH_PX};
use crate::error::{ChartError, ChartResult};
use crate::render::MarkerShape;

pub const DEFAULT_LINE_WIDTH_PX: f64 = 1.5;
pub const DEFAULT_MARKER_SIZE_PX: f64 = 9.0;

/// Boxplot series options.
///
/// This type is serializable so hosts can load series setup from JSON. Every
/// field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxplotOptions {
    #[serde(default)]
    pub box_width: BoxWidth,
    /// Cap applied when `box_width` is `auto`.
    #[serde(default = "default_box_max_width")]
    pub box_max_width: f64,
    /// Stroke width for whiskers, caps, median tick and box outline.
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Value-axis padding factor; 1 means no padding.
    #[serde(default = "default_y_axis_pad")]
    pub y_axis_pad: f64,
    #[serde(default = "default_marker_size")]
    pub marker_size: f64,
    #[serde(default)]
    pub outlier_marker_shape: MarkerShape,
    /// Drop shadows for outlier markers. Lines never get shadows.
    #[serde(default = "default_true")]
    pub shadow: bool,
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default)]
    pub highlighter: Option<HighlighterOptions>,
}

impl Default for BoxplotOptions {
    fn default() -> Self {
        Self {
            box_width: BoxWidth::Auto,
            box_max_width: DEFAULT_BOX_MAX_WIDTH_PX,
            line_width: DEFAULT_LINE_WIDTH_PX,
            y_axis_pad: DEFAULT_AXIS_PAD,
            marker_size: DEFAULT_MARKER_SIZE_PX,
            outlier_marker_shape: MarkerShape::Circle,
            shadow: true,
            show: true,
            highlighter: None,
        }
    }
}

impl BoxplotOptions {
    #[must_use]
    pub fn with_box_width(mut self, box_width: BoxWidth) -> Self {
        self.box_width = box_width;
        self
    }

    #[must_use]
    pub fn with_box_max_width(mut self, box_max_width: f64) -> Self {
        self.box_max_width = box_max_width;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_y_axis_pad(mut self, y_axis_pad: f64) -> Self {
        self.y_axis_pad = y_axis_pad;
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: HighlighterOptions) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid boxplot options: {err}")))?;
        options.validate()
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|err| ChartError::InvalidData(format!("cannot serialize options: {err}")))
    }

    /// Rejects values no layout can recover from.
    ///
    /// Zero or negative fixed box widths pass: layout clamps them to a
    /// visible width instead.
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.box_max_width, "boxMaxWidth"),
            (self.line_width, "lineWidth"),
            (self.marker_size, "markerSize"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "boxplot option `{name}` must be finite and > 0"
                )));
            }
        }
        if let BoxWidth::Fixed(width_px) = self.box_width {
            if !width_px.is_finite() {
                return Err(ChartError::InvalidData(
                    "boxplot option `boxWidth` must be finite".to_owned(),
                ));
            }
        }
        if !self.y_axis_pad.is_finite() || self.y_axis_pad < 1.0 {
            return Err(ChartError::InvalidData(
                "boxplot option `yAxisPad` must be finite and >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_box_max_width() -> f64 {
    DEFAULT_BOX_MAX_WIDTH_PX
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH_PX
}

fn default_y_axis_pad() -> f64 {
    DEFAULT_AXIS_PAD
}

fn default_marker_size() -> f64 {
    DEFAULT_MARKER_SIZE_PX
}

fn default_true() -> bool {
    true
}
