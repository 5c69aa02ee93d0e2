// File: crates/surface-core/src/geometry.rs
// Summary: Pixel-space helpers: surface size defaults, margins, and plot rectangles.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // right margin leaves room for the color scale
    fn default() -> Self {
        Self::new(56, 120, 48, 48)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area of a `width x height` surface left after removing `insets`.
    /// Degenerate sizes collapse to a zero-width/height rect instead of inverting.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        Self::from_ltrb(left, top, (width - insets.right as i32).max(left), (height - insets.bottom as i32).max(top))
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) as f32 * 0.5, (self.top + self.bottom) as f32 * 0.5)
    }
}
