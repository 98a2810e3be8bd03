use boxplot_rs::render::{
    BoxPrimitive, BoxplotFrame, MarkerPrimitive, MarkerShape, NullRenderer, RectPrimitive,
    SegmentPrimitive, ShapeRenderer,
};

fn marker(x: f64, y: f64) -> MarkerPrimitive {
    MarkerPrimitive {
        x,
        y,
        shape: MarkerShape::Circle,
        size_px: 9.0,
        filled: true,
        shadow: true,
    }
}

#[test]
fn frame_validation_rejects_invalid_primitives() {
    let mut frame = BoxplotFrame::new(400.0);
    frame.push(BoxPrimitive::Segment(SegmentPrimitive::new(0.0, 0.0, 0.0, 10.0, 1.5)));
    frame.validate().expect("valid frame");

    frame.push(BoxPrimitive::Rect(RectPrimitive::new(0.0, 0.0, 0.0, 10.0, 1.5)));
    assert!(frame.validate().is_err());
}

#[test]
fn zero_height_box_is_valid() {
    RectPrimitive::new(10.0, 20.0, 30.0, 0.0, 1.0)
        .validate()
        .expect("flat box is drawable");
}

#[test]
fn segment_stroke_must_be_positive() {
    assert!(SegmentPrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0).validate().is_err());
    assert_eq!(SegmentPrimitive::new(0.0, 0.0, 3.0, 4.0, 1.0).length(), 5.0);
}

#[test]
fn null_renderer_stops_on_first_invalid_primitive() {
    let primitives = [
        BoxPrimitive::Marker(marker(1.0, 1.0)),
        BoxPrimitive::Marker(marker(f64::NAN, 1.0)),
        BoxPrimitive::Marker(marker(2.0, 2.0)),
    ];
    let mut renderer = NullRenderer::default();

    assert!(renderer.draw_primitives(&primitives).is_err());
    assert_eq!(renderer.marker_count, 1);
}

#[test]
fn primitives_serialize_with_kind_tag() {
    let json = serde_json::to_string(&BoxPrimitive::Marker(marker(1.0, 2.0))).expect("json");
    assert!(json.contains(r#""kind":"marker""#));
    assert!(json.contains(r#""shape":"circle""#));
}
