// File: crates/surface-core/src/axis.rs
// Summary: Axis model: title plus the data range it covers.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis spanning the finite entries of `values`; `[0, 1]` if there are none.
    pub fn fit(label: impl Into<String>, values: &[f64]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() {
            return Self::new(label, 0.0, 1.0);
        }
        Self::new(label, min, max)
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Map `v` to `[0, 1]` over this axis; a flat axis maps everything to 0.5.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.span();
        if span.abs() < 1e-12 { 0.5 } else { (v - self.min) / span }
    }
}
