use tracing::{debug, trace};

use crate::core::{
    AxisMapping, AxisRange, BoxGeometry, DataBounds, LinearTickGenerator, Sample, TickGenerator,
    compute_bounds, project_boxes, resolve_box_width_px, resolve_range, samples_from_rows,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{BoxplotFrame, ShapeRenderer};

use super::box_primitives_builder::{BoxPrimitiveStyle, box_primitives};
use super::highlighter::{ResolvedHighlighter, resolve_highlighter};
use super::BoxplotOptions;

/// Box-and-whisker series: owns samples and options, resolves the value-axis
/// range once, and lays out every sample on each draw pass.
#[derive(Debug, Clone)]
pub struct BoxplotSeries {
    samples: Vec<Sample>,
    options: BoxplotOptions,
    highlighter: ResolvedHighlighter,
    axis_range: Option<AxisRange>,
}

impl BoxplotSeries {
    /// Validates options and merges highlighter defaults once.
    pub fn new(samples: Vec<Sample>, options: BoxplotOptions) -> ChartResult<Self> {
        let options = options.validate()?;
        let highlighter = resolve_highlighter(options.highlighter.as_ref());
        Ok(Self {
            samples,
            options,
            highlighter,
            axis_range: None,
        })
    }

    /// Builds a series from flat rows, failing on the first malformed row.
    pub fn from_rows<R>(rows: &[R], options: BoxplotOptions) -> ChartResult<Self>
    where
        R: AsRef<[f64]>,
    {
        Self::new(samples_from_rows(rows)?, options)
    }

    /// Builds a series from a JSON array of rows, e.g. `[[1, 10, 20, 30, 40, 50, 60]]`.
    pub fn from_json_str(json: &str, options: BoxplotOptions) -> ChartResult<Self> {
        let samples: Vec<Sample> = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidData(format!("invalid sample data: {err}")))?;
        Self::new(samples, options)
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn options(&self) -> &BoxplotOptions {
        &self.options
    }

    #[must_use]
    pub fn highlighter(&self) -> &ResolvedHighlighter {
        &self.highlighter
    }

    /// Replaces the samples and drops the cached axis range.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        debug!(count = samples.len(), "set boxplot samples");
        self.samples = samples;
        self.axis_range = None;
    }

    #[must_use]
    pub fn data_bounds(&self) -> DataBounds {
        compute_bounds(&self.samples)
    }

    /// Scans the samples, resolves the padded value-axis range and caches it.
    pub fn init<T>(&mut self, ticks: &T) -> ChartResult<AxisRange>
    where
        T: TickGenerator + ?Sized,
    {
        let bounds = self.data_bounds();
        let range = resolve_range(bounds, self.options.y_axis_pad, ticks)?;
        debug!(
            data_min = bounds.min,
            data_max = bounds.max,
            pad = self.options.y_axis_pad,
            axis_min = range.min,
            axis_max = range.max,
            "boxplot axis range resolved"
        );
        self.axis_range = Some(range);
        Ok(range)
    }

    /// [`BoxplotSeries::init`] with the linear 1-2-5 tick heuristic.
    pub fn init_default(&mut self) -> ChartResult<AxisRange> {
        self.init(&LinearTickGenerator::default())
    }

    /// Range cached by the last `init`, reused by re-layouts without rescanning.
    #[must_use]
    pub fn axis_range(&self) -> Option<AxisRange> {
        self.axis_range
    }

    #[must_use]
    pub fn box_width_px(&self, plot_width_px: f64) -> f64 {
        resolve_box_width_px(
            self.options.box_width,
            self.options.box_max_width,
            plot_width_px,
            self.samples.len(),
        )
    }

    /// Projects every sample for a plot of the given pixel width.
    pub fn layout<X, Y>(
        &self,
        x_map: &X,
        y_map: &Y,
        plot_width_px: f64,
    ) -> ChartResult<Vec<BoxGeometry>>
    where
        X: AxisMapping + ?Sized,
        Y: AxisMapping + ?Sized,
    {
        project_boxes(
            &self.samples,
            x_map,
            y_map,
            self.box_width_px(plot_width_px),
            self.options.line_width,
        )
    }

    /// Builds the ordered primitives for one draw pass.
    ///
    /// A hidden series yields an empty frame.
    pub fn build_frame<X, Y>(
        &self,
        x_map: &X,
        y_map: &Y,
        plot_width_px: f64,
    ) -> ChartResult<BoxplotFrame>
    where
        X: AxisMapping + ?Sized,
        Y: AxisMapping + ?Sized,
    {
        let mut frame = BoxplotFrame::new(plot_width_px);
        if !self.options.show {
            trace!("boxplot series hidden, skipping layout");
            return Ok(frame);
        }

        let style = BoxPrimitiveStyle::from_options(&self.options);
        let box_width_px = self.box_width_px(plot_width_px);
        let geometries = project_boxes(
            &self.samples,
            x_map,
            y_map,
            box_width_px,
            self.options.line_width,
        )?;
        debug!(
            sample_count = geometries.len(),
            box_width_px,
            "boxplot draw pass"
        );
        for geometry in &geometries {
            frame.extend(box_primitives(geometry, style));
        }
        Ok(frame)
    }

    /// Lays out every sample and forwards primitives to `renderer` in order.
    pub fn draw<R, X, Y>(
        &self,
        renderer: &mut R,
        x_map: &X,
        y_map: &Y,
        plot_width_px: f64,
    ) -> ChartResult<()>
    where
        R: ShapeRenderer + ?Sized,
        X: AxisMapping + ?Sized,
        Y: AxisMapping + ?Sized,
    {
        let frame = self.build_frame(x_map, y_map, plot_width_px)?;
        renderer.render_frame(&frame)
    }

    /// Tooltip text for the sample at `index`, if the highlighter is shown.
    #[must_use]
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.highlighter.format_tooltip(self.samples.get(index)?)
    }
}
