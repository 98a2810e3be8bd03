pub mod axis_range;
pub mod bounds;
pub mod boxplot;
pub mod primitives;
pub mod sample;
pub mod scale;
pub mod ticks;
pub mod types;

pub use axis_range::{AxisRange, DEFAULT_AXIS_PAD, resolve_range};
pub use bounds::{DataBounds, compute_bounds};
pub use boxplot::{
    AUTO_BOX_WIDTH_FRACTION, BoxGeometry, BoxWidth, DEFAULT_BOX_MAX_WIDTH_PX, MIN_BOX_WIDTH_PX,
    auto_box_width_px, project_box, project_boxes, resolve_box_width_px,
};
#[cfg(feature = "parallel-projection")]
pub use boxplot::par_project_boxes;
pub use sample::{CORE_FIELD_COUNT, Outliers, Sample, samples_from_rows};
pub use scale::{AxisMapping, LinearAxis};
pub use ticks::{LinearTickGenerator, NiceTicks, TickGenerator};
pub use types::Viewport;
