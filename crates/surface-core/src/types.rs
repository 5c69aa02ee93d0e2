// File: crates/surface-core/src/types.rs
// Summary: Sample types: raw observations, sample sets, and duplicate-free reduced sets.

use std::fmt;

/// One observed measurement at a 2-D location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SamplePoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<(f64, f64, f64)> for SamplePoint {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

/// Horizontal grid axis, used to report which coordinate collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridAxis {
    X,
    Y,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::X => f.write_str("X"),
            GridAxis::Y => f.write_str("Y"),
        }
    }
}

/// Ordered samples as read from the input. Locations may repeat.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSet {
    points: Vec<SamplePoint>,
}

impl SampleSet {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn push(&mut self, point: SamplePoint) {
        self.points.push(point);
    }

    pub fn into_points(self) -> Vec<SamplePoint> { self.points }
}

impl From<Vec<(f64, f64, f64)>> for SampleSet {
    fn from(rows: Vec<(f64, f64, f64)>) -> Self {
        Self { points: rows.into_iter().map(SamplePoint::from).collect() }
    }
}

impl FromIterator<SamplePoint> for SampleSet {
    fn from_iter<I: IntoIterator<Item = SamplePoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// Samples with unique `(x, y)` locations.
/// Contract: built only by [`crate::dedup::reduce_duplicates`], so no two points share a location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReducedSampleSet {
    points: Vec<SamplePoint>,
}

impl ReducedSampleSet {
    pub(crate) fn from_unique(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Inclusive `(min, max)` of x and y, or `None` when empty.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.points.is_empty() { return None; }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in &self.points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        Some(((x_min, x_max), (y_min, y_max)))
    }

    /// Find the reduced value stored at exactly `(x, y)`.
    pub fn value_at(&self, x: f64, y: f64) -> Option<f64> {
        self.points.iter().find(|p| p.x == x && p.y == y).map(|p| p.z)
    }
}
