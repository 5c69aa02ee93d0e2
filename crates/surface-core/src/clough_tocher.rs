// File: crates/surface-core/src/clough_tocher.rs
// Summary: Clough-Tocher C1 piecewise-cubic interpolant over a Delaunay triangulation.
//
// Each triangle is split at its centroid into three cubic Bezier patches.
// Vertex gradients come from a global fit that minimises the curvature of
// the interpolant along triangulation edges.

use crate::error::NumericalError;
use crate::triangulation::Triangulation;

/// Gradient estimation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientOptions {
    /// Stop when the largest relative gradient change of a sweep falls below this.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self { tolerance: 1e-6, max_iterations: 400 }
    }
}

/// A fitted interpolant. Queries outside the convex hull yield `NaN`.
#[derive(Clone, Debug)]
pub struct CloughTocher2D {
    tri: Triangulation,
    values: Vec<f64>,
    gradients: Vec<[f64; 2]>,
}

impl CloughTocher2D {
    /// Triangulate `points` and estimate gradients for `values`.
    /// Contract: `points.len() == values.len()`, locations unique.
    pub fn fit(points: Vec<[f64; 2]>, values: Vec<f64>, opts: GradientOptions) -> Result<Self, NumericalError> {
        debug_assert_eq!(points.len(), values.len());
        let tri = Triangulation::new(points);
        let gradients = estimate_gradients(&tri, &values, opts)?;
        Ok(Self { tri, values, gradients })
    }

    pub fn triangulation(&self) -> &Triangulation { &self.tri }
    pub fn gradients(&self) -> &[[f64; 2]] { &self.gradients }

    /// Evaluate at `q`; `hint` is a triangle index to start the point location from.
    /// Returns the value and the triangle that contained `q`.
    pub fn evaluate_with_hint(&self, q: [f64; 2], hint: Option<usize>) -> (f64, Option<usize>) {
        match self.tri.locate(q, hint) {
            Some((t, b)) => (self.evaluate_in(t, b), Some(t)),
            None => (f64::NAN, hint),
        }
    }

    pub fn evaluate(&self, q: [f64; 2]) -> f64 {
        self.evaluate_with_hint(q, None).0
    }

    fn evaluate_in(&self, t: usize, b: [f64; 3]) -> f64 {
        let tri = &self.tri;
        let [i0, i1, i2] = tri.triangles()[t];
        let p = tri.points();
        let (p0, p1, p2) = (p[i0], p[i1], p[i2]);

        let e12 = [p1[0] - p0[0], p1[1] - p0[1]];
        let e23 = [p2[0] - p1[0], p2[1] - p1[1]];
        let e31 = [p0[0] - p2[0], p0[1] - p2[1]];

        let (f1, f2, f3) = (self.values[i0], self.values[i1], self.values[i2]);
        let (g1, g2, g3) = (self.gradients[i0], self.gradients[i1], self.gradients[i2]);
        let dot = |g: [f64; 2], e: [f64; 2]| g[0] * e[0] + g[1] * e[1];

        // directional derivatives along the edges, taken from each end
        let df12 = dot(g1, e12);
        let df21 = -dot(g2, e12);
        let df23 = dot(g2, e23);
        let df32 = -dot(g3, e23);
        let df31 = dot(g3, e31);
        let df13 = -dot(g1, e31);

        let c3000 = f1;
        let c2100 = (df12 + 3.0 * c3000) / 3.0;
        let c2010 = (df13 + 3.0 * c3000) / 3.0;
        let c0300 = f2;
        let c1200 = (df21 + 3.0 * c0300) / 3.0;
        let c0210 = (df23 + 3.0 * c0300) / 3.0;
        let c0030 = f3;
        let c1020 = (df31 + 3.0 * c0030) / 3.0;
        let c0120 = (df32 + 3.0 * c0030) / 3.0;

        let c2001 = (c2100 + c2010 + c3000) / 3.0;
        let c0201 = (c1200 + c0300 + c0210) / 3.0;
        let c0021 = (c1020 + c0120 + c0030) / 3.0;

        // Cross-boundary direction per edge: towards the neighbour's centroid,
        // which is affine invariant and agreed on by both triangles.
        let mut g = [-0.5; 3];
        for (k, gk) in g.iter_mut().enumerate() {
            let Some(nb) = tri.neighbors()[t][k] else { continue };
            let c = tri.barycentric(t, tri.centroid(nb));
            let (num, den) = match k {
                0 => (2.0 * c[2] + c[1] - 1.0, 2.0 - 3.0 * c[2] - 3.0 * c[1]),
                1 => (2.0 * c[0] + c[2] - 1.0, 2.0 - 3.0 * c[0] - 3.0 * c[2]),
                _ => (2.0 * c[1] + c[0] - 1.0, 2.0 - 3.0 * c[1] - 3.0 * c[0]),
            };
            *gk = num / den;
        }

        let c0111 = (g[0] * (-c0300 + 3.0 * c0210 - 3.0 * c0120 + c0030)
            + (-c0300 + 2.0 * c0210 - c0120 + c0021 + c0201))
            / 2.0;
        let c1011 = (g[1] * (-c0030 + 3.0 * c1020 - 3.0 * c2010 + c3000)
            + (-c0030 + 2.0 * c1020 - c2010 + c2001 + c0021))
            / 2.0;
        let c1101 = (g[2] * (-c3000 + 3.0 * c2100 - 3.0 * c1200 + c0300)
            + (-c3000 + 2.0 * c2100 - c1200 + c2001 + c0201))
            / 2.0;

        let c1002 = (c1101 + c1011 + c2001) / 3.0;
        let c0102 = (c1101 + c0111 + c0201) / 3.0;
        let c0012 = (c1011 + c0111 + c0021) / 3.0;
        let c0003 = (c1002 + c0102 + c0012) / 3.0;

        // Extended barycentric coordinates: the smallest one moves to the
        // centroid vertex, selecting the sub-triangle the point falls in.
        let minval = b[0].min(b[1]).min(b[2]);
        let b1 = b[0] - minval;
        let b2 = b[1] - minval;
        let b3 = b[2] - minval;
        let b4 = 3.0 * minval;

        b1.powi(3) * c3000
            + 3.0 * b1 * b1 * b2 * c2100
            + 3.0 * b1 * b1 * b3 * c2010
            + 3.0 * b1 * b1 * b4 * c2001
            + 3.0 * b1 * b2 * b2 * c1200
            + 6.0 * b1 * b2 * b4 * c1101
            + 3.0 * b1 * b3 * b3 * c1020
            + 6.0 * b1 * b3 * b4 * c1011
            + 3.0 * b1 * b4 * b4 * c1002
            + b2.powi(3) * c0300
            + 3.0 * b2 * b2 * b3 * c0210
            + 3.0 * b2 * b2 * b4 * c0201
            + 3.0 * b2 * b3 * b3 * c0120
            + 6.0 * b2 * b3 * b4 * c0111
            + 3.0 * b2 * b4 * b4 * c0102
            + b3.powi(3) * c0030
            + 3.0 * b3 * b3 * b4 * c0021
            + 3.0 * b3 * b4 * b4 * c0012
            + b4.powi(3) * c0003
    }
}

/// Global gradient estimate (Nielson): Gauss-Seidel sweeps that, vertex by
/// vertex, solve the 2x2 system minimising the second derivative of the
/// edge cubics to all neighbours.
pub fn estimate_gradients(
    tri: &Triangulation,
    values: &[f64],
    opts: GradientOptions,
) -> Result<Vec<[f64; 2]>, NumericalError> {
    let points = tri.points();
    let mut grad = vec![[0.0f64; 2]; points.len()];
    if tri.is_empty() {
        return Ok(grad);
    }
    let adjacency = tri.vertex_neighbors();

    let mut converged = false;
    let mut sweeps = 0usize;
    while sweeps < opts.max_iterations {
        sweeps += 1;
        let mut err = 0.0f64;
        for (ip, neighbors) in adjacency.iter().enumerate() {
            if neighbors.is_empty() { continue; }
            let mut q = [0.0f64; 3];
            let mut s = [0.0f64; 2];
            for &jp in neighbors {
                let ex = points[jp][0] - points[ip][0];
                let ey = points[jp][1] - points[ip][1];
                let l = (ex * ex + ey * ey).sqrt();
                let l3 = l * l * l;
                let df2 = -ex * grad[jp][0] - ey * grad[jp][1];
                let r = 6.0 * (values[ip] - values[jp]) - 2.0 * df2;
                q[0] += 4.0 * ex * ex / l3;
                q[1] += 4.0 * ex * ey / l3;
                q[2] += 4.0 * ey * ey / l3;
                s[0] += r * ex / l3;
                s[1] += r * ey / l3;
            }
            let det = q[0] * q[2] - q[1] * q[1];
            if det == 0.0 { continue; }
            let r0 = (q[2] * s[0] - q[1] * s[1]) / det;
            let r1 = (-q[1] * s[0] + q[0] * s[1]) / det;
            if !r0.is_finite() || !r1.is_finite() {
                return Err(NumericalError::NonFiniteGradient { vertex: ip });
            }

            let change = (grad[ip][0] + r0).abs().max((grad[ip][1] + r1).abs());
            grad[ip] = [-r0, -r1];
            err = err.max(change / r0.abs().max(r1.abs()).max(1.0));
        }
        if err < opts.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        tracing::debug!(sweeps, "gradient estimation converged");
    } else {
        tracing::warn!(sweeps, "gradient estimation did not converge; results may be inaccurate");
    }
    Ok(grad)
}
