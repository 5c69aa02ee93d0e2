// File: crates/surface-core/tests/interpolate.rs
// Purpose: End-to-end gridding behavior: exactness at samples, hull clipping, degenerate inputs.

use surface_core::{
    build_grid, load_samples_from_reader, reduce_duplicates, GridAxis, GridInterpolator, GridOptions, LoadOptions,
    SampleSet, SurfaceError, EXAMPLE_DATA,
};

fn example() -> SampleSet {
    load_samples_from_reader(EXAMPLE_DATA.as_bytes(), &LoadOptions::default()).expect("load example")
}

// > 0 when p is left of a->b
fn cross(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> f64 {
    (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0)
}

#[test]
fn example_grid_spans_zero_to_two_and_hits_corners() {
    let samples = example();
    let reduced = GridInterpolator::reduce_duplicates(&samples);
    assert_eq!(reduced.len(), 9);

    let grid = build_grid(&reduced, 100).expect("grid");
    assert_eq!(grid.shape(), (100, 100));
    assert_eq!(grid.x_axis()[0], 0.0);
    assert_eq!(grid.x_axis()[99], 2.0);
    assert_eq!(grid.y_axis()[0], 0.0);
    assert_eq!(grid.y_axis()[99], 2.0);

    // row i follows y, column j follows x
    let corners = [((0, 0), 0.0), ((0, 99), 4.0), ((99, 0), 4.0), ((99, 99), 6.0)];
    for ((i, j), want) in corners {
        let got = grid.z(i, j);
        assert!((got - want).abs() < 1e-9, "corner ({i},{j}) = {got}, want {want}");
    }
    // the hull of the example is the whole square
    assert_eq!(grid.defined_count(), 100 * 100);
}

#[test]
fn grid_nodes_on_samples_reproduce_sample_values() {
    let samples = example();
    let reduced = reduce_duplicates(&samples);
    let grid = build_grid(&reduced, 3).expect("grid");
    for p in samples.points() {
        let (i, j) = (p.y as usize, p.x as usize);
        assert!((grid.z(i, j) - p.z).abs() < 1e-9, "node at ({}, {})", p.x, p.y);
    }
}

#[test]
fn interior_values_stay_smooth_and_bounded() {
    let reduced = reduce_duplicates(&example());
    let grid = build_grid(&reduced, 41).expect("grid");
    // a C1 cubic over data in [0, 6] should not wander far outside that band
    for &z in grid.grid_z() {
        assert!(z.is_finite());
        assert!((-1.0..=7.0).contains(&z), "z = {z}");
    }
}

#[test]
fn planar_data_is_reproduced() {
    let plane = |x: f64, y: f64| 2.0 * x - 3.0 * y + 1.0;
    let locs = [
        (0.0, 0.0), (4.0, 0.0), (0.0, 3.0), (4.0, 3.0), (1.3, 0.7), (2.9, 2.2),
        (0.6, 2.4), (3.3, 0.4), (2.0, 1.5), (1.1, 1.9),
    ];
    let samples = SampleSet::from(locs.iter().map(|&(x, y)| (x, y, plane(x, y))).collect::<Vec<_>>());
    let grid = build_grid(&reduce_duplicates(&samples), 25).expect("grid");
    for i in 0..25 {
        for j in 0..25 {
            let (x, y) = (grid.x(i, j), grid.y(i, j));
            let z = grid.z(i, j);
            assert!((z - plane(x, y)).abs() < 1e-3, "({x}, {y}): {z} vs {}", plane(x, y));
        }
    }
}

#[test]
fn nodes_outside_the_hull_are_undefined() {
    let (a, b, c) = ((0.0, 0.0), (2.0, 0.0), (1.0, 2.0));
    let samples = SampleSet::from(vec![
        (a.0, a.1, 0.0),
        (b.0, b.1, 1.0),
        (c.0, c.1, 2.0),
        (1.0, 0.5, 1.0),
    ]);
    let grid = build_grid(&reduce_duplicates(&samples), 50).expect("grid");

    let mut outside = 0;
    let mut inside = 0;
    for i in 0..50 {
        for j in 0..50 {
            let p = (grid.x(i, j), grid.y(i, j));
            let d = cross(a, b, p).min(cross(b, c, p)).min(cross(c, a, p));
            if d < -1e-9 {
                outside += 1;
                assert!(grid.z(i, j).is_nan(), "extrapolated at {p:?}");
            } else if d > 1e-9 {
                inside += 1;
                assert!(grid.z(i, j).is_finite(), "missing value at {p:?}");
            }
        }
    }
    assert!(outside > 0 && inside > 0);
    assert!(grid.z(49, 0).is_nan());
    assert!(grid.z(49, 49).is_nan());
}

#[test]
fn duplicates_are_averaged_before_gridding() {
    let samples = SampleSet::from(vec![
        (0.0, 0.0, 2.0),
        (0.0, 0.0, 4.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
        (1.0, 1.0, 2.0),
    ]);
    let grid = GridInterpolator::new(GridOptions::default().with_resolution(2))
        .interpolate(&samples)
        .expect("grid");
    assert!((grid.z(0, 0) - 3.0).abs() < 1e-9);
    assert!((grid.z(1, 1) - 2.0).abs() < 1e-9);
}

#[test]
fn shared_x_is_a_degenerate_domain() {
    let samples = SampleSet::from(vec![(1.0, 0.0, 0.0), (1.0, 1.0, 1.0), (1.0, 2.0, 4.0), (1.0, 3.0, 9.0)]);
    match build_grid(&reduce_duplicates(&samples), 100) {
        Err(SurfaceError::DegenerateDomain { axis, value, samples }) => {
            assert_eq!(axis, GridAxis::X);
            assert_eq!(value, 1.0);
            assert_eq!(samples, 4);
        }
        other => panic!("expected DegenerateDomain, got {other:?}"),
    }
}

#[test]
fn shared_y_is_a_degenerate_domain() {
    let samples = SampleSet::from(vec![(0.0, 5.0, 0.0), (1.0, 5.0, 1.0), (2.0, 5.0, 4.0)]);
    let err = build_grid(&reduce_duplicates(&samples), 10).unwrap_err();
    assert!(matches!(err, SurfaceError::DegenerateDomain { axis: GridAxis::Y, .. }));
}

#[test]
fn collinear_samples_give_an_all_undefined_grid() {
    let samples = SampleSet::from(vec![(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (2.0, 2.0, 2.0), (3.0, 3.0, 3.0)]);
    let grid = build_grid(&reduce_duplicates(&samples), 20).expect("degenerate but defined");
    assert_eq!(grid.shape(), (20, 20));
    assert_eq!(grid.defined_count(), 0);
    assert!(grid.z_range().is_none());
}

#[test]
fn two_samples_give_an_all_undefined_grid() {
    let samples = SampleSet::from(vec![(0.0, 0.0, 1.0), (1.0, 2.0, 3.0)]);
    let grid = build_grid(&reduce_duplicates(&samples), 10).expect("grid");
    assert!(grid.grid_z().iter().all(|z| z.is_nan()));
}

#[test]
fn empty_input_is_rejected() {
    let interp = GridInterpolator::default();
    assert!(matches!(interp.interpolate(&SampleSet::default()), Err(SurfaceError::EmptyInput)));
    let reduced = reduce_duplicates(&SampleSet::default());
    assert!(matches!(interp.build_grid(&reduced), Err(SurfaceError::EmptyInput)));
}

#[test]
fn resolution_below_two_is_rejected() {
    let reduced = reduce_duplicates(&example());
    assert!(matches!(build_grid(&reduced, 1), Err(SurfaceError::InvalidResolution(1))));
}

#[test]
fn rescaling_keeps_sample_values() {
    let samples = SampleSet::from(vec![
        (0.0, 0.0, 1.0),
        (1000.0, 0.0, 2.0),
        (0.0, 0.01, 3.0),
        (1000.0, 0.01, 4.0),
        (400.0, 0.004, 2.5),
    ]);
    let interp = GridInterpolator::new(GridOptions::default().with_resolution(11).with_rescale(true));
    let grid = interp.interpolate(&samples).expect("grid");
    assert!((grid.z(0, 0) - 1.0).abs() < 1e-9);
    assert!((grid.z(0, 10) - 2.0).abs() < 1e-9);
    assert!((grid.z(10, 0) - 3.0).abs() < 1e-9);
    assert!((grid.z(10, 10) - 4.0).abs() < 1e-9);
    assert_eq!(grid.defined_count(), 121);
}

#[test]
fn gridding_is_deterministic() {
    let reduced = reduce_duplicates(&example());
    let a = build_grid(&reduced, 30).expect("grid");
    let b = build_grid(&reduced, 30).expect("grid");
    assert_eq!(a.grid_z().len(), b.grid_z().len());
    for (x, y) in a.grid_z().iter().zip(b.grid_z()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn nan_location_is_rejected_before_triangulating() {
    let samples = SampleSet::from(vec![
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
        (1.0, 1.0, 2.0),
        (f64::NAN, 0.5, 1.0),
    ]);
    match build_grid(&reduce_duplicates(&samples), 10) {
        Err(SurfaceError::NonFiniteCoordinate { index, x, y }) => {
            assert_eq!(index, 4);
            assert!(x.is_nan());
            assert_eq!(y, 0.5);
        }
        other => panic!("expected NonFiniteCoordinate, got {other:?}"),
    }
}

#[test]
fn infinite_location_is_rejected() {
    let samples = SampleSet::from(vec![
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, 1.0),
        (1.0, 1.0, 2.0),
        (f64::INFINITY, 1.0, 2.0),
    ]);
    let err = build_grid(&reduce_duplicates(&samples), 10).unwrap_err();
    assert!(matches!(err, SurfaceError::NonFiniteCoordinate { index: 4, .. }), "got {err:?}");

    let samples = SampleSet::from(vec![(0.0, 0.0, 0.0), (1.0, f64::NEG_INFINITY, 1.0), (0.0, 1.0, 1.0)]);
    let err = GridInterpolator::default().interpolate(&samples).unwrap_err();
    assert!(matches!(err, SurfaceError::NonFiniteCoordinate { index: 1, .. }), "got {err:?}");
}

#[test]
fn non_finite_value_is_an_interpolation_failure() {
    use std::error::Error as _;
    use surface_core::NumericalError;

    let samples = SampleSet::from(vec![
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 1.0),
        (0.0, 1.0, f64::NAN),
        (1.0, 1.0, 2.0),
    ]);
    let err = build_grid(&reduce_duplicates(&samples), 10).unwrap_err();
    assert!(matches!(err, SurfaceError::InterpolationFailure { samples: 4, .. }), "got {err:?}");
    assert_eq!(err.to_string(), "interpolation over 4 samples failed");

    let source = err.source().expect("wrapped cause");
    let cause = source.downcast_ref::<NumericalError>().expect("numerical cause");
    assert!(matches!(cause, NumericalError::NonFiniteGradient { .. }));
}
