// File: crates/surface-core/tests/dedup.rs
// Purpose: Validate duplicate-location averaging.

use surface_core::{reduce_duplicates, load_samples_from_reader, LoadOptions, SampleSet, EXAMPLE_DATA};

#[test]
fn distinct_locations_pass_through_unchanged() {
    let samples = load_samples_from_reader(EXAMPLE_DATA.as_bytes(), &LoadOptions::default()).expect("load example");
    let reduced = reduce_duplicates(&samples);
    assert_eq!(reduced.len(), 9);
    for p in samples.points() {
        assert_eq!(reduced.value_at(p.x, p.y), Some(p.z));
    }
}

#[test]
fn duplicate_pair_is_averaged() {
    let samples = SampleSet::from(vec![
        (0.0, 0.0, 2.0),
        (0.0, 0.0, 4.0),
        (1.0, 0.0, 7.0),
        (0.0, 1.0, -1.0),
        (1.0, 1.0, 0.5),
    ]);
    let reduced = reduce_duplicates(&samples);
    assert_eq!(reduced.len(), 4);
    assert_eq!(reduced.value_at(0.0, 0.0), Some(3.0));
    assert_eq!(reduced.value_at(1.0, 0.0), Some(7.0));
    assert_eq!(reduced.value_at(0.0, 1.0), Some(-1.0));
    assert_eq!(reduced.value_at(1.0, 1.0), Some(0.5));
}

#[test]
fn k_duplicates_reduce_to_their_mean() {
    let zs = [1.5, -2.0, 10.25, 3.0, 0.1, 7.0];
    let mut rows: Vec<(f64, f64, f64)> = zs.iter().map(|&z| (0.3, -4.2, z)).collect();
    rows.push((1.0, 1.0, 1.0));
    let reduced = reduce_duplicates(&SampleSet::from(rows));

    assert_eq!(reduced.len(), 2);
    let want = zs.iter().sum::<f64>() / zs.len() as f64;
    let got = reduced.value_at(0.3, -4.2).expect("merged point");
    assert!((got - want).abs() < 1e-12, "mean {got} != {want}");
}

#[test]
fn signed_zero_is_one_location() {
    let samples = SampleSet::from(vec![(0.0, 1.0, 1.0), (-0.0, 1.0, 3.0)]);
    let reduced = reduce_duplicates(&samples);
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced.points()[0].z, 2.0);
}

#[test]
fn near_duplicates_are_kept_apart() {
    let x = 0.1 + 0.2; // 0.30000000000000004
    let samples = SampleSet::from(vec![(0.3, 0.0, 1.0), (x, 0.0, 5.0)]);
    let reduced = reduce_duplicates(&samples);
    assert_eq!(reduced.len(), 2);
}

#[test]
fn first_seen_order_is_kept() {
    let samples = SampleSet::from(vec![(2.0, 2.0, 1.0), (0.0, 0.0, 1.0), (2.0, 2.0, 3.0), (1.0, 0.0, 0.0)]);
    let reduced = reduce_duplicates(&samples);
    let locs: Vec<(f64, f64)> = reduced.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(locs, vec![(2.0, 2.0), (0.0, 0.0), (1.0, 0.0)]);
}

#[test]
fn empty_input_reduces_to_empty() {
    let reduced = reduce_duplicates(&SampleSet::default());
    assert!(reduced.is_empty());
    assert!(reduced.bounds().is_none());
}
