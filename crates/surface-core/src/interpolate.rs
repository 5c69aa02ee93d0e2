// File: crates/surface-core/src/interpolate.rs
// Summary: GridInterpolator: scattered samples -> regular Clough-Tocher grid.

use crate::clough_tocher::{CloughTocher2D, GradientOptions};
use crate::dedup;
use crate::error::{Result, SurfaceError};
use crate::grid::{linspace, Grid};
use crate::types::{GridAxis, ReducedSampleSet, SampleSet};

/// Default number of nodes along each grid axis.
pub const DEFAULT_RESOLUTION: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    /// Nodes per axis; the grid is `resolution x resolution`.
    pub resolution: usize,
    /// Normalise sample coordinates to unit extent before triangulating.
    pub rescale: bool,
    pub gradient_tolerance: f64,
    pub gradient_max_iterations: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        let g = GradientOptions::default();
        Self {
            resolution: DEFAULT_RESOLUTION,
            rescale: false,
            gradient_tolerance: g.tolerance,
            gradient_max_iterations: g.max_iterations,
        }
    }
}

impl GridOptions {
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }

    fn gradient(&self) -> GradientOptions {
        GradientOptions { tolerance: self.gradient_tolerance, max_iterations: self.gradient_max_iterations }
    }
}

/// Stateless gridding of scattered samples. Holds only its options.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridInterpolator {
    pub options: GridOptions,
}

impl GridInterpolator {
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    /// See [`dedup::reduce_duplicates`].
    pub fn reduce_duplicates(samples: &SampleSet) -> ReducedSampleSet {
        dedup::reduce_duplicates(samples)
    }

    /// Reject empty input, average duplicate locations, then grid.
    pub fn interpolate(&self, samples: &SampleSet) -> Result<Grid> {
        if samples.is_empty() {
            return Err(SurfaceError::EmptyInput);
        }
        let reduced = dedup::reduce_duplicates(samples);
        self.build_grid(&reduced)
    }

    /// Interpolate `samples` onto a `resolution x resolution` grid spanning their bounds.
    ///
    /// Nodes outside the samples' convex hull are `NaN`. Fewer than three
    /// samples, or collinear samples, give an all-`NaN` grid. Sample locations
    /// must be finite; a non-finite `z` surfaces as `InterpolationFailure`.
    pub fn build_grid(&self, samples: &ReducedSampleSet) -> Result<Grid> {
        let resolution = self.options.resolution;
        let bad = samples.points().iter().enumerate().find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()));
        if let Some((index, p)) = bad {
            return Err(SurfaceError::NonFiniteCoordinate { index, x: p.x, y: p.y });
        }
        let ((x_min, x_max), (y_min, y_max)) = samples.bounds().ok_or(SurfaceError::EmptyInput)?;
        if resolution < 2 {
            return Err(SurfaceError::InvalidResolution(resolution));
        }
        if x_min == x_max {
            return Err(SurfaceError::DegenerateDomain { axis: GridAxis::X, value: x_min, samples: samples.len() });
        }
        if y_min == y_max {
            return Err(SurfaceError::DegenerateDomain { axis: GridAxis::Y, value: y_min, samples: samples.len() });
        }
        tracing::debug!(samples = samples.len(), x_min, x_max, y_min, y_max, resolution, "building grid");

        let xs = linspace(x_min, x_max, resolution);
        let ys = linspace(y_min, y_max, resolution);

        // Optional affine normalisation; queries go through the same map.
        let (offset, scale) = if self.options.rescale {
            let n = samples.len() as f64;
            let mx = samples.points().iter().map(|p| p.x).sum::<f64>() / n;
            let my = samples.points().iter().map(|p| p.y).sum::<f64>() / n;
            ([mx, my], [x_max - x_min, y_max - y_min])
        } else {
            ([0.0, 0.0], [1.0, 1.0])
        };
        let to_local = |x: f64, y: f64| [(x - offset[0]) / scale[0], (y - offset[1]) / scale[1]];

        let points = samples.points().iter().map(|p| to_local(p.x, p.y)).collect();
        let values = samples.points().iter().map(|p| p.z).collect();
        let interp = CloughTocher2D::fit(points, values, self.options.gradient())
            .map_err(|source| SurfaceError::InterpolationFailure { samples: samples.len(), source })?;

        let mut grid_z = Vec::with_capacity(resolution * resolution);
        let mut hint = None;
        for &y in &ys {
            for &x in &xs {
                let (z, t) = interp.evaluate_with_hint(to_local(x, y), hint);
                hint = t;
                grid_z.push(z);
            }
        }

        let grid = Grid::from_axes(xs, ys, grid_z);
        if grid.defined_count() == 0 {
            tracing::warn!(samples = samples.len(), "no grid node lies inside the sample hull; grid is all NaN");
        }
        Ok(grid)
    }
}

/// Grid `samples` at `resolution` with default options otherwise.
pub fn build_grid(samples: &ReducedSampleSet, resolution: usize) -> Result<Grid> {
    GridInterpolator::new(GridOptions::default().with_resolution(resolution)).build_grid(samples)
}
