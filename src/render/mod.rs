mod frame;
mod null_renderer;
mod primitives;

pub use frame::BoxplotFrame;
pub use null_renderer::{NullRenderer, RecordingRenderer};
pub use primitives::{
    BoxPrimitive, MarkerPrimitive, MarkerShape, RectPrimitive, SegmentPrimitive,
};

use crate::error::ChartResult;

/// Shape and marker drawing capability supplied by the host.
///
/// Layout never draws directly; it hands primitives to this contract so the
/// geometry stays independent of any canvas backend.
pub trait ShapeRenderer {
    fn draw_segment(&mut self, segment: &SegmentPrimitive) -> ChartResult<()>;

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()>;

    /// Forwards primitives in submission order.
    fn draw_primitives(&mut self, primitives: &[BoxPrimitive]) -> ChartResult<()> {
        for primitive in primitives {
            match primitive {
                BoxPrimitive::Segment(segment) => self.draw_segment(segment)?,
                BoxPrimitive::Rect(rect) => self.draw_rect(rect)?,
                BoxPrimitive::Marker(marker) => self.draw_marker(marker)?,
            }
        }
        Ok(())
    }

    fn render_frame(&mut self, frame: &BoxplotFrame) -> ChartResult<()> {
        self.draw_primitives(&frame.primitives)
    }
}
