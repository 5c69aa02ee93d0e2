// File: crates/surface-core/tests/grid_shape.rs
// Purpose: Validate grid shape, mesh layout, and bounds.

use surface_core::{build_grid, linspace, reduce_duplicates, SampleSet};

fn scattered() -> SampleSet {
    SampleSet::from(vec![
        (-1.5, 0.25, 1.0),
        (3.0, -2.0, 0.0),
        (0.5, 4.5, 2.0),
        (2.2, 3.1, -1.0),
        (-0.7, -1.9, 0.5),
        (1.1, 0.9, 0.25),
    ])
}

#[test]
fn linspace_hits_both_ends() {
    let v = linspace(0.1, 0.7, 7);
    assert_eq!(v.len(), 7);
    assert_eq!(v[0], 0.1);
    assert_eq!(v[6], 0.7);
    for w in v.windows(2) {
        assert!(((w[1] - w[0]) - 0.1).abs() < 1e-12);
    }
    assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
    assert!(linspace(3.0, 5.0, 0).is_empty());
}

#[test]
fn grid_is_resolution_squared() {
    let reduced = reduce_duplicates(&scattered());
    for r in [2usize, 7, 100] {
        let grid = build_grid(&reduced, r).expect("grid");
        assert_eq!(grid.shape(), (r, r));
        assert_eq!(grid.grid_x().len(), r * r);
        assert_eq!(grid.grid_y().len(), r * r);
        assert_eq!(grid.grid_z().len(), r * r);
        let (gx, gy, gz) = grid.to_nested();
        assert_eq!(gx.len(), r);
        assert!(gx.iter().chain(gy.iter()).chain(gz.iter()).all(|row| row.len() == r));
    }
}

#[test]
fn grid_spans_sample_bounds() {
    let reduced = reduce_duplicates(&scattered());
    let grid = build_grid(&reduced, 100).expect("grid");

    let min = |v: &[f64]| v.iter().copied().fold(f64::INFINITY, f64::min);
    let max = |v: &[f64]| v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min(grid.grid_x()), -1.5);
    assert_eq!(max(grid.grid_x()), 3.0);
    assert_eq!(min(grid.grid_y()), -2.0);
    assert_eq!(max(grid.grid_y()), 4.5);
}

#[test]
fn mesh_varies_x_by_column_and_y_by_row() {
    let reduced = reduce_duplicates(&scattered());
    let grid = build_grid(&reduced, 5).expect("grid");
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(grid.x(i, j), grid.x_axis()[j]);
            assert_eq!(grid.y(i, j), grid.y_axis()[i]);
        }
    }
    let step = grid.x_axis()[1] - grid.x_axis()[0];
    assert!((step - 4.5 / 4.0).abs() < 1e-12);
}
