//! Series-level API consumed by host charts.

mod box_primitives_builder;
mod highlighter;
mod options;
mod series;

pub use box_primitives_builder::{BoxPrimitiveStyle, box_primitives, layout_sample};
pub use highlighter::{
    BOXPLOT_TOOLTIP_TEMPLATE, HighlighterOptions, ResolvedHighlighter, TooltipAxes,
    resolve_highlighter,
};
pub use options::{BoxplotOptions, DEFAULT_LINE_WIDTH_PX, DEFAULT_MARKER_SIZE_PX};
pub use series::BoxplotSeries;
