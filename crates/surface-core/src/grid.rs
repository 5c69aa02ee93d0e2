// File: crates/surface-core/src/grid.rs
// Summary: Uniform subdivision helpers and the immutable interpolated Grid.

/// `steps` evenly spaced values from `start` to `end`, with both end points exact.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut v: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            v[steps - 1] = end;
            v
        }
    }
}

/// Regular grid of interpolated values.
///
/// All three arrays are `rows × cols`, stored row-major: row `i` follows the
/// y axis, column `j` the x axis. `z` is `NaN` where no value is defined.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    grid_x: Vec<f64>,
    grid_y: Vec<f64>,
    grid_z: Vec<f64>,
}

impl Grid {
    /// Mesh `x_axis` (columns) against `y_axis` (rows) and attach `grid_z`.
    /// Contract: `grid_z.len() == x_axis.len() * y_axis.len()`.
    pub(crate) fn from_axes(x_axis: Vec<f64>, y_axis: Vec<f64>, grid_z: Vec<f64>) -> Self {
        let (grid_x, grid_y) = meshgrid(&x_axis, &y_axis);
        debug_assert_eq!(grid_z.len(), grid_x.len());
        Self { rows: y_axis.len(), cols: x_axis.len(), x_axis, y_axis, grid_x, grid_y, grid_z }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }

    /// Distinct x node coordinates (one per column).
    pub fn x_axis(&self) -> &[f64] { &self.x_axis }
    /// Distinct y node coordinates (one per row).
    pub fn y_axis(&self) -> &[f64] { &self.y_axis }

    pub fn grid_x(&self) -> &[f64] { &self.grid_x }
    pub fn grid_y(&self) -> &[f64] { &self.grid_y }
    pub fn grid_z(&self) -> &[f64] { &self.grid_z }

    #[inline]
    pub fn x(&self, i: usize, j: usize) -> f64 { self.grid_x[i * self.cols + j] }
    #[inline]
    pub fn y(&self, i: usize, j: usize) -> f64 { self.grid_y[i * self.cols + j] }
    #[inline]
    pub fn z(&self, i: usize, j: usize) -> f64 { self.grid_z[i * self.cols + j] }

    pub fn z_row(&self, i: usize) -> &[f64] {
        &self.grid_z[i * self.cols..(i + 1) * self.cols]
    }

    /// Number of nodes carrying a defined value.
    pub fn defined_count(&self) -> usize {
        self.grid_z.iter().filter(|z| z.is_finite()).count()
    }

    /// `(min, max)` over the defined values, or `None` if every node is undefined.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &z in self.grid_z.iter().filter(|z| z.is_finite()) {
            lo = lo.min(z);
            hi = hi.max(z);
        }
        if lo.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Nested copies of the three arrays, `[row][col]`.
    pub fn to_nested(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let nest = |flat: &[f64]| flat.chunks(self.cols).map(|r| r.to_vec()).collect::<Vec<_>>();
        (nest(&self.grid_x), nest(&self.grid_y), nest(&self.grid_z))
    }
}

/// Outer-product mesh: `gx[i][j] = xs[j]`, `gy[i][j] = ys[i]`, flattened row-major.
pub fn meshgrid(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len() * ys.len();
    let mut gx = Vec::with_capacity(n);
    let mut gy = Vec::with_capacity(n);
    for &y in ys {
        for &x in xs {
            gx.push(x);
            gy.push(y);
        }
    }
    (gx, gy)
}
