use crate::error::ChartResult;
use crate::render::{
    BoxPrimitive, MarkerPrimitive, RectPrimitive, SegmentPrimitive, ShapeRenderer,
};

/// No-op renderer for headless use.
///
/// It still validates every primitive so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub segment_count: usize,
    pub rect_count: usize,
    pub marker_count: usize,
}

impl ShapeRenderer for NullRenderer {
    fn draw_segment(&mut self, segment: &SegmentPrimitive) -> ChartResult<()> {
        segment.validate()?;
        self.segment_count += 1;
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        rect.validate()?;
        self.rect_count += 1;
        Ok(())
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()> {
        marker.validate()?;
        self.marker_count += 1;
        Ok(())
    }
}

/// Renderer that keeps every submitted primitive in submission order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub primitives: Vec<BoxPrimitive>,
}

impl ShapeRenderer for RecordingRenderer {
    fn draw_segment(&mut self, segment: &SegmentPrimitive) -> ChartResult<()> {
        self.primitives.push(BoxPrimitive::Segment(*segment));
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()> {
        self.primitives.push(BoxPrimitive::Rect(*rect));
        Ok(())
    }

    fn draw_marker(&mut self, marker: &MarkerPrimitive) -> ChartResult<()> {
        self.primitives.push(BoxPrimitive::Marker(*marker));
        Ok(())
    }
}
