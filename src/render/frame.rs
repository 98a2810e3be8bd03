use crate::error::ChartResult;
use crate::render::{BoxPrimitive, MarkerPrimitive, RectPrimitive, SegmentPrimitive};

/// Ordered primitives for one draw pass of a boxplot series.
///
/// Submission order is draw order: later primitives paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxplotFrame {
    pub plot_width_px: f64,
    pub primitives: Vec<BoxPrimitive>,
}

impl BoxplotFrame {
    #[must_use]
    pub fn new(plot_width_px: f64) -> Self {
        Self {
            plot_width_px,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: BoxPrimitive) {
        self.primitives.push(primitive);
    }

    pub fn extend<I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = BoxPrimitive>,
    {
        self.primitives.extend(primitives);
    }

    pub fn segments(&self) -> impl Iterator<Item = SegmentPrimitive> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            BoxPrimitive::Segment(segment) => Some(*segment),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = RectPrimitive> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            BoxPrimitive::Rect(rect) => Some(*rect),
            _ => None,
        })
    }

    pub fn markers(&self) -> impl Iterator<Item = MarkerPrimitive> + '_ {
        self.primitives.iter().filter_map(|primitive| match primitive {
            BoxPrimitive::Marker(marker) => Some(*marker),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
