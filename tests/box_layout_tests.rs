use approx::assert_abs_diff_eq;
use boxplot_rs::api::{BoxPrimitiveStyle, layout_sample};
use boxplot_rs::core::{
    AxisRange, BoxWidth, LinearAxis, MIN_BOX_WIDTH_PX, Sample, Viewport, auto_box_width_px,
    project_box, resolve_box_width_px,
};
use boxplot_rs::render::{BoxPrimitive, MarkerShape};

fn axes() -> (LinearAxis, LinearAxis) {
    let viewport = Viewport::new(200, 500);
    let x_axis = LinearAxis::horizontal(0.0, 2.0, viewport).expect("x axis");
    let y_axis =
        LinearAxis::vertical(AxisRange::new(0.0, 100.0).expect("range"), viewport).expect("y axis");
    (x_axis, y_axis)
}

fn sample_with_outliers() -> Sample {
    Sample::from_row(&[1.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 5.0]).expect("valid row")
}

#[test]
fn box_geometry_is_deterministic() {
    let (x_axis, y_axis) = axes();
    let geometry =
        project_box(&sample_with_outliers(), &x_axis, &y_axis, 60.0, 1.5).expect("geometry");

    assert_abs_diff_eq!(geometry.center_x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.min_y, 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.q1_y, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.median_y, 350.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.q3_y, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.max_y, 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.end_cap_left, 85.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.end_cap_right, 115.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.box_left, 71.5, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.box_right, 128.5, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.box_top, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.box_height, 100.0, epsilon = 1e-9);
    assert_eq!(geometry.outlier_ys.len(), 2);
    assert_abs_diff_eq!(geometry.outlier_ys[0], 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.outlier_ys[1], 475.0, epsilon = 1e-9);
}

#[test]
fn primitives_follow_whisker_cap_median_box_outlier_order() {
    let (x_axis, y_axis) = axes();
    let primitives = layout_sample(
        &sample_with_outliers(),
        &x_axis,
        &y_axis,
        60.0,
        BoxPrimitiveStyle::default(),
    )
    .expect("layout");

    assert_eq!(primitives.len(), 8);
    let kinds: Vec<&str> = primitives
        .iter()
        .map(|primitive| match primitive {
            BoxPrimitive::Segment(_) => "segment",
            BoxPrimitive::Rect(_) => "rect",
            BoxPrimitive::Marker(_) => "marker",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "segment", "segment", "segment", "segment", "segment", "rect", "marker", "marker"
        ]
    );

    let BoxPrimitive::Segment(lower_whisker) = primitives[0] else {
        panic!("expected lower whisker segment");
    };
    assert_abs_diff_eq!(lower_whisker.x1, lower_whisker.x2, epsilon = 1e-9);
    assert_abs_diff_eq!(lower_whisker.y1, 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lower_whisker.y2, 400.0, epsilon = 1e-9);
    assert_eq!(lower_whisker.stroke_width, 1.5);

    let BoxPrimitive::Segment(median) = primitives[4] else {
        panic!("expected median segment");
    };
    let BoxPrimitive::Rect(rect) = primitives[5] else {
        panic!("expected box rect");
    };
    assert_abs_diff_eq!(median.x2 - median.x1, rect.width, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.x, 71.5, epsilon = 1e-9);
    assert_abs_diff_eq!(rect.width, 57.0, epsilon = 1e-9);

    for primitive in &primitives[6..] {
        let BoxPrimitive::Marker(marker) = primitive else {
            panic!("expected outlier marker");
        };
        assert!(marker.filled);
        assert_eq!(marker.shape, MarkerShape::Circle);
        assert_abs_diff_eq!(marker.x, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn only_outlier_markers_carry_shadows() {
    let (x_axis, y_axis) = axes();
    let primitives = layout_sample(
        &sample_with_outliers(),
        &x_axis,
        &y_axis,
        60.0,
        BoxPrimitiveStyle::default(),
    )
    .expect("layout");

    let shadowed = primitives
        .iter()
        .filter(|primitive| matches!(primitive, BoxPrimitive::Marker(marker) if marker.shadow))
        .count();
    assert_eq!(shadowed, 2);
}

#[test]
fn closures_work_as_axis_mappings() {
    let x_map = |unit: f64| unit * 50.0;
    let y_map = |unit: f64| 400.0 - unit * 4.0;
    let sample = Sample::new(2.0, 10.0, 20.0, 30.0, 40.0, 50.0).expect("sample");

    let geometry = project_box(&sample, &x_map, &y_map, 40.0, 1.0).expect("geometry");
    assert_eq!(geometry.center_x, 100.0);
    assert_eq!(geometry.median_y, 280.0);
    assert_eq!(geometry.end_cap_width(), 20.0);
    assert_eq!(geometry.box_width(), 38.0);
}

#[test]
fn box_height_is_positive_for_upward_pixel_axes() {
    let y_map = |unit: f64| unit * 10.0;
    let x_map = |unit: f64| unit;
    let sample = Sample::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0).expect("sample");

    let geometry = project_box(&sample, &x_map, &y_map, 20.0, 1.0).expect("geometry");
    assert_eq!(geometry.box_top, 20.0);
    assert_eq!(geometry.box_height, 20.0);
}

#[test]
fn auto_width_for_two_samples_on_200px_plot_is_60px() {
    assert_abs_diff_eq!(auto_box_width_px(100.0, 200.0, 2), 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        resolve_box_width_px(BoxWidth::Auto, 100.0, 200.0, 2),
        60.0,
        epsilon = 1e-9
    );
}

#[test]
fn auto_width_is_capped_for_few_samples() {
    assert_eq!(auto_box_width_px(100.0, 1_000.0, 1), 100.0);
    assert_eq!(auto_box_width_px(100.0, 1_000.0, 0), 100.0);
}

#[test]
fn fixed_width_ignores_plot_size_and_cap() {
    assert_eq!(resolve_box_width_px(BoxWidth::Fixed(140.0), 100.0, 50.0, 10), 140.0);
}

#[test]
fn degenerate_widths_clamp_to_minimum_visible_width() {
    assert_eq!(
        resolve_box_width_px(BoxWidth::Fixed(0.0), 100.0, 500.0, 3),
        MIN_BOX_WIDTH_PX
    );
    assert_eq!(
        resolve_box_width_px(BoxWidth::Fixed(-8.0), 100.0, 500.0, 3),
        MIN_BOX_WIDTH_PX
    );
    assert_eq!(
        resolve_box_width_px(BoxWidth::Auto, 100.0, 0.0, 3),
        MIN_BOX_WIDTH_PX
    );
}

#[test]
fn thick_strokes_never_produce_empty_boxes() {
    let x_map = |unit: f64| unit;
    let y_map = |unit: f64| unit;
    let sample = Sample::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0).expect("sample");

    let geometry = project_box(&sample, &x_map, &y_map, 4.0, 3.0).expect("geometry");
    assert_eq!(geometry.box_width(), MIN_BOX_WIDTH_PX);
    assert_eq!(geometry.end_cap_width(), 2.0);
}

#[test]
fn non_finite_mapping_is_rejected() {
    let x_map = |unit: f64| unit;
    let y_map = |_unit: f64| f64::NAN;
    let sample = Sample::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0).expect("sample");
    assert!(project_box(&sample, &x_map, &y_map, 10.0, 1.0).is_err());
}

#[cfg(feature = "parallel-projection")]
#[test]
fn parallel_projection_matches_sequential_order() {
    use boxplot_rs::core::{par_project_boxes, project_boxes};

    let (x_axis, y_axis) = axes();
    let samples: Vec<Sample> = (0..64)
        .map(|i| {
            let base = f64::from(i);
            Sample::new(base / 32.0, base, base + 1.0, base + 2.0, base + 3.0, base + 4.0)
                .expect("sample")
        })
        .collect();

    let sequential = project_boxes(&samples, &x_axis, &y_axis, 6.0, 1.0).expect("sequential");
    let parallel = par_project_boxes(&samples, &x_axis, &y_axis, 6.0, 1.0).expect("parallel");
    assert_eq!(sequential, parallel);
}
