use boxplot_rs::core::{DataBounds, Sample, compute_bounds};

fn sample(row: &[f64]) -> Sample {
    Sample::from_row(row).expect("valid row")
}

#[test]
fn empty_sample_set_has_empty_bounds() {
    let bounds = compute_bounds(&[]);
    assert_eq!(bounds, DataBounds::default());
    assert!(bounds.is_empty());
    assert_eq!(bounds.as_pair(), None);
}

#[test]
fn single_sample_bounds_are_its_min_and_max() {
    let bounds = compute_bounds(&[sample(&[1.0, 10.0, 20.0, 30.0, 40.0, 50.0])]);
    assert_eq!(bounds.as_pair(), Some((10.0, 50.0)));
}

#[test]
fn outliers_extend_bounds_in_both_directions() {
    let bounds = compute_bounds(&[sample(&[1.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 5.0])]);
    assert_eq!(bounds.as_pair(), Some((5.0, 60.0)));
}

#[test]
fn outliers_inside_the_whiskers_do_not_shrink_bounds() {
    let bounds = compute_bounds(&[sample(&[1.0, 10.0, 20.0, 30.0, 40.0, 50.0, 25.0, 35.0])]);
    assert_eq!(bounds.as_pair(), Some((10.0, 50.0)));
}

#[test]
fn bounds_span_every_sample() {
    let bounds = compute_bounds(&[
        sample(&[1.0, 3.0, 4.0, 5.0, 6.0, 7.0]),
        sample(&[2.0, -2.0, 0.0, 1.0, 2.0, 3.0]),
        sample(&[3.0, 10.0, 11.0, 12.0, 13.0, 14.0, 22.0]),
    ]);
    assert_eq!(bounds.as_pair(), Some((-2.0, 22.0)));
}
