// File: crates/surface-core/src/colormap.rs
// Summary: Sequential colormaps mapping normalized values to RGB.

/// Viridis anchors at evenly spaced stops 0, 1/9, ..., 1.
const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const GREYS: [[u8; 3]; 2] = [[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Viridis,
    Greys,
}

impl Colormap {
    fn stops(&self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Greys => &GREYS,
        }
    }

    /// RGB at `t` in `[0, 1]`; out-of-range values clamp, `NaN` maps to the low end.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let f = pos - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        let mix = |k: usize| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * f).round() as u8;
        [mix(0), mix(1), mix(2)]
    }

    /// RGB for `value` within `[lo, hi]`. A flat range maps to the middle of the scale.
    pub fn sample_range(&self, value: f64, lo: f64, hi: f64) -> [u8; 3] {
        let span = hi - lo;
        if span.abs() < 1e-12 { return self.sample(0.5); }
        self.sample((value - lo) / span)
    }

    pub fn find(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "viridis" => Some(Colormap::Viridis),
            "greys" | "grays" => Some(Colormap::Greys),
            _ => None,
        }
    }
}
