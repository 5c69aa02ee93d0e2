// File: crates/surface-core/src/view.rs
// Summary: Camera for the surface view: azimuth/elevation orbit and the oblique projection it implies.

use crate::geometry::RectI32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Rotation about the vertical axis, degrees.
    pub azimuth_deg: f64,
    /// Tilt above the x/y plane, degrees, kept within `[0, 90]`.
    pub elevation_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { azimuth_deg: 45.0, elevation_deg: 30.0 }
    }
}

/// A point after projection: screen-plane coordinates (y up) and depth (larger is farther).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub sx: f64,
    pub sy: f64,
    pub depth: f64,
}

impl Camera {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self { azimuth_deg: azimuth_deg.rem_euclid(360.0), elevation_deg: elevation_deg.clamp(0.0, 90.0) }
    }

    pub fn orbit(&mut self, d_azimuth: f64, d_elevation: f64) {
        *self = Self::new(self.azimuth_deg + d_azimuth, self.elevation_deg + d_elevation);
    }

    /// Project a point of the unit view box, `u, v, w` each in `[-0.5, 0.5]`.
    pub fn project(&self, u: f64, v: f64, w: f64) -> Projected {
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let sx = u * ca - v * sa;
        let toward = u * sa + v * ca;
        Projected { sx, sy: w * ce + toward * se, depth: toward * ce - w * se }
    }

    /// Screen mapping that fits the projected unit box into `rect`, centered.
    pub fn fit(&self, rect: &RectI32) -> ScreenMap {
        let mut lo = (f64::INFINITY, f64::INFINITY);
        let mut hi = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &u in &[-0.5, 0.5] {
            for &v in &[-0.5, 0.5] {
                for &w in &[-0.5, 0.5] {
                    let p = self.project(u, v, w);
                    lo = (lo.0.min(p.sx), lo.1.min(p.sy));
                    hi = (hi.0.max(p.sx), hi.1.max(p.sy));
                }
            }
        }
        let span_x = (hi.0 - lo.0).max(1e-9);
        let span_y = (hi.1 - lo.1).max(1e-9);
        let scale = (rect.width() as f64 / span_x).min(rect.height() as f64 / span_y);
        let (cx, cy) = rect.center();
        ScreenMap {
            scale,
            mid: ((lo.0 + hi.0) * 0.5, (lo.1 + hi.1) * 0.5),
            center: (cx as f64, cy as f64),
        }
    }
}

/// Projected-plane to pixel transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMap {
    scale: f64,
    mid: (f64, f64),
    center: (f64, f64),
}

impl ScreenMap {
    #[inline]
    pub fn to_px(&self, p: &Projected) -> (f32, f32) {
        (
            (self.center.0 + (p.sx - self.mid.0) * self.scale) as f32,
            (self.center.1 - (p.sy - self.mid.1) * self.scale) as f32,
        )
    }
}
