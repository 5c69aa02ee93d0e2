// File: crates/surface-core/src/triangulation.rs
// Summary: Delaunay triangulation of sample locations with neighbour links and point location.

use delaunator::{Point, EMPTY};

/// Barycentric tolerance for "inside this triangle".
pub const EPS: f64 = 100.0 * f64::EPSILON;
/// Looser tolerance used only by the exhaustive fallback scan.
pub const EPS_BROAD: f64 = 1.490_116_119_384_765_6e-8; // sqrt(f64::EPSILON)

/// Delaunay triangulation over 2-D points.
///
/// `neighbors[t][k]` is the triangle across the edge opposite vertex `k` of
/// triangle `t`, or `None` on the convex hull.
#[derive(Clone, Debug)]
pub struct Triangulation {
    points: Vec<[f64; 2]>,
    triangles: Vec<[usize; 3]>,
    neighbors: Vec<[Option<usize>; 3]>,
    // twice the signed area; 0 for degenerate slivers
    dets: Vec<f64>,
}

impl Triangulation {
    /// Triangulate `points`. Fewer than three points, or all points collinear,
    /// yield a triangulation with no triangles.
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        let input: Vec<Point> = points.iter().map(|p| Point { x: p[0], y: p[1] }).collect();
        let tri = delaunator::triangulate(&input);

        let count = tri.triangles.len() / 3;
        let mut triangles = Vec::with_capacity(count);
        let mut neighbors = Vec::with_capacity(count);
        for t in 0..count {
            triangles.push([tri.triangles[3 * t], tri.triangles[3 * t + 1], tri.triangles[3 * t + 2]]);
            // halfedge 3t+e runs from vertex e to vertex e+1, i.e. it is opposite vertex e+2
            let across = |e: usize| {
                let h = tri.halfedges[3 * t + e];
                if h == EMPTY { None } else { Some(h / 3) }
            };
            neighbors.push([across(1), across(2), across(0)]);
        }

        let dets = triangles
            .iter()
            .map(|&[a, b, c]| {
                let (pa, pb, pc) = (points[a], points[b], points[c]);
                (pb[0] - pa[0]) * (pc[1] - pa[1]) - (pc[0] - pa[0]) * (pb[1] - pa[1])
            })
            .collect();

        tracing::debug!(points = points.len(), triangles = count, hull = tri.hull.len(), "delaunay triangulation");
        Self { points, triangles, neighbors, dets }
    }

    pub fn points(&self) -> &[[f64; 2]] { &self.points }
    pub fn triangles(&self) -> &[[usize; 3]] { &self.triangles }
    pub fn neighbors(&self) -> &[[Option<usize>; 3]] { &self.neighbors }
    pub fn is_empty(&self) -> bool { self.triangles.is_empty() }

    /// Barycentric coordinates of `q` in triangle `t`; non-finite for slivers.
    pub fn barycentric(&self, t: usize, q: [f64; 2]) -> [f64; 3] {
        let [a, b, c] = self.triangles[t];
        let (pa, pb, pc) = (self.points[a], self.points[b], self.points[c]);
        let det = self.dets[t];
        let l1 = ((q[0] - pa[0]) * (pc[1] - pa[1]) - (pc[0] - pa[0]) * (q[1] - pa[1])) / det;
        let l2 = ((pb[0] - pa[0]) * (q[1] - pa[1]) - (q[0] - pa[0]) * (pb[1] - pa[1])) / det;
        [1.0 - l1 - l2, l1, l2]
    }

    /// Centroid of triangle `t`.
    pub fn centroid(&self, t: usize) -> [f64; 2] {
        let [a, b, c] = self.triangles[t];
        let (pa, pb, pc) = (self.points[a], self.points[b], self.points[c]);
        [(pa[0] + pb[0] + pc[0]) / 3.0, (pa[1] + pb[1] + pc[1]) / 3.0]
    }

    /// Triangle containing `q` and its barycentric coordinates, or `None` outside the hull.
    /// `hint` seeds the walk; pass the previous hit for spatially coherent queries.
    pub fn locate(&self, q: [f64; 2], hint: Option<usize>) -> Option<(usize, [f64; 3])> {
        if self.triangles.is_empty() { return None; }
        let mut t = hint.filter(|&h| h < self.triangles.len()).unwrap_or(0);

        // A visibility walk on a Delaunay triangulation cannot cycle, but slivers
        // make the coordinates unreliable, so bound the walk and fall back.
        for _ in 0..self.triangles.len() + 1 {
            let b = self.barycentric(t, q);
            if b.iter().any(|v| !v.is_finite()) {
                return self.locate_exhaustive(q);
            }
            let (k, min) = b
                .iter()
                .copied()
                .enumerate()
                .fold((0, f64::INFINITY), |acc, (k, v)| if v < acc.1 { (k, v) } else { acc });
            if min >= -EPS {
                return Some((t, b));
            }
            match self.neighbors[t][k] {
                Some(next) => t = next,
                // beyond a hull edge of a convex region
                None => return None,
            }
        }
        self.locate_exhaustive(q)
    }

    /// Scan every triangle; strict tolerance first, then the broad one.
    pub fn locate_exhaustive(&self, q: [f64; 2]) -> Option<(usize, [f64; 3])> {
        for eps in [EPS, EPS_BROAD] {
            for t in 0..self.triangles.len() {
                let b = self.barycentric(t, q);
                if b.iter().all(|v| v.is_finite() && *v >= -eps) {
                    return Some((t, b));
                }
            }
        }
        None
    }

    /// Sorted, de-duplicated edge neighbours of each vertex.
    /// Points that the triangulation skipped get an empty list.
    pub fn vertex_neighbors(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.points.len()];
        for &[a, b, c] in &self.triangles {
            adj[a].extend_from_slice(&[b, c]);
            adj[b].extend_from_slice(&[a, c]);
            adj[c].extend_from_slice(&[a, b]);
        }
        for list in &mut adj {
            list.sort_unstable();
            list.dedup();
        }
        adj
    }
}
