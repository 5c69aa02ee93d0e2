// File: crates/surface-core/src/theme.rs
// Summary: Dark/Light/Slate theming for surface plot colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    /// Heatmap cells with no interpolated value.
    pub no_data: skia::Color,
    /// Thin outline drawn around surface cells.
    pub mesh_line: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            no_data: skia::Color::from_argb(255, 30, 30, 34),
            mesh_line: skia::Color::from_argb(48, 0, 0, 0),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 10, 10, 20),
            no_data: skia::Color::from_argb(255, 238, 238, 242),
            mesh_line: skia::Color::from_argb(40, 0, 0, 0),
        }
    }

    /// Slate-gray palette: #2F4F4F background, #F5F5F5 text, #708090 lines.
    pub fn slate() -> Self {
        Self {
            name: "slate",
            background: skia::Color::from_argb(255, 0x2f, 0x4f, 0x4f),
            grid: skia::Color::from_argb(255, 0x3b, 0x5e, 0x5e),
            axis_line: skia::Color::from_argb(255, 0x70, 0x80, 0x90),
            axis_label: skia::Color::from_argb(255, 0xf5, 0xf5, 0xf5),
            title: skia::Color::from_argb(255, 0xf5, 0xf5, 0xf5),
            no_data: skia::Color::from_argb(255, 0x28, 0x44, 0x44),
            mesh_line: skia::Color::from_argb(56, 0x46, 0x82, 0xb4),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::slate()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
