// File: crates/surface-core/src/plot.rs
// Summary: SurfacePlot and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::Axis;
use crate::colormap::Colormap;
use crate::error::{Result, SurfaceError};
use crate::geometry::{Insets, RectI32, HEIGHT, WIDTH};
use crate::grid::{linspace, Grid};
use crate::theme::Theme;
use crate::view::{Camera, Projected, ScreenMap};

pub const DEFAULT_TITLE: &str = "3D Surface Plot";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlotStyle {
    /// Projected 3-D surface.
    #[default]
    Surface,
    /// Top-down color map of the grid.
    Heatmap,
}

impl PlotStyle {
    pub fn find(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "surface" => Some(PlotStyle::Surface),
            "heatmap" => Some(PlotStyle::Heatmap),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub style: PlotStyle,
    pub camera: Camera,
    pub colormap: Colormap,
    pub draw_labels: bool,
    /// Draw the color scale bar to the right of the plot.
    pub show_scale: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            style: PlotStyle::Surface,
            camera: Camera::default(),
            colormap: Colormap::Viridis,
            draw_labels: true,
            show_scale: true,
        }
    }
}

pub struct SurfacePlot {
    pub grid: Grid,
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub z_axis: Axis,
}

impl SurfacePlot {
    /// Plot of `grid` with axes fitted to its coordinates and defined values.
    pub fn new(grid: Grid) -> Self {
        let x_axis = Axis::fit("X", grid.x_axis());
        let y_axis = Axis::fit("Y", grid.y_axis());
        let z_axis = Axis::fit("Z", grid.grid_z());
        Self { grid, title: DEFAULT_TITLE.to_string(), x_axis, y_axis, z_axis }
    }

    pub fn with_titles(mut self, x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        self.x_axis.label = x.into();
        self.y_axis.label = y.into();
        self.z_axis.label = z.into();
        self
    }

    /// Render the plot to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the plot and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| SurfaceError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let rect = RectI32::inset(opts.width, opts.height, &opts.insets);
        match opts.style {
            PlotStyle::Surface => self.draw_surface(canvas, &rect, opts),
            PlotStyle::Heatmap => self.draw_heatmap(canvas, &rect, opts),
        }
        if opts.show_scale {
            self.draw_color_scale(canvas, &rect, opts);
        }
        if opts.draw_labels {
            draw_text(canvas, &self.title, (rect.left as f32, rect.top as f32 - 18.0), 18.0, opts.theme.title);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SurfaceError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    // unit view box coordinates of node (i, j)
    fn node(&self, i: usize, j: usize) -> (f64, f64, f64) {
        (
            self.x_axis.normalize(self.grid.x(i, j)) - 0.5,
            self.y_axis.normalize(self.grid.y(i, j)) - 0.5,
            self.z_axis.normalize(self.grid.z(i, j)) - 0.5,
        )
    }

    fn draw_surface(&self, canvas: &skia::Canvas, rect: &RectI32, opts: &RenderOptions) {
        let cam = opts.camera;
        let map = cam.fit(rect);
        draw_floor(canvas, &cam, &map, &opts.theme);

        let (rows, cols) = self.grid.shape();
        let mut cells: Vec<([Projected; 4], f64)> = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1));
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols.saturating_sub(1) {
                let corners = [(i, j), (i, j + 1), (i + 1, j + 1), (i + 1, j)];
                let zs = corners.map(|(a, b)| self.grid.z(a, b));
                if zs.iter().any(|z| !z.is_finite()) { continue; }
                let quad = corners.map(|(a, b)| {
                    let (u, v, w) = self.node(a, b);
                    cam.project(u, v, w)
                });
                cells.push((quad, zs.iter().sum::<f64>() / 4.0));
            }
        }
        // painter's algorithm: far cells first
        let depth = |q: &[Projected; 4]| q.iter().map(|p| p.depth).sum::<f64>();
        cells.sort_by(|a, b| depth(&b.0).total_cmp(&depth(&a.0)));

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(0.5);
        edge.set_color(opts.theme.mesh_line);

        for (quad, z) in &cells {
            let mut path = skia::Path::new();
            path.move_to(map.to_px(&quad[0]));
            for p in &quad[1..] {
                path.line_to(map.to_px(p));
            }
            path.close();
            let [r, g, b] = opts.colormap.sample_range(*z, self.z_axis.min, self.z_axis.max);
            fill.set_color(skia::Color::from_rgb(r, g, b));
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &edge);
        }

        if opts.draw_labels {
            let label_at = |u: f64, v: f64, w: f64| map.to_px(&cam.project(u, v, w));
            let c = opts.theme.axis_label;
            draw_text(canvas, &self.x_axis.label, label_at(0.0, -0.62, -0.5), 14.0, c);
            draw_text(canvas, &self.y_axis.label, label_at(0.62, 0.0, -0.5), 14.0, c);
            draw_text(canvas, &self.z_axis.label, label_at(-0.55, 0.55, 0.0), 14.0, c);
        }
    }

    fn draw_heatmap(&self, canvas: &skia::Canvas, rect: &RectI32, opts: &RenderOptions) {
        let (rows, cols) = self.grid.shape();
        if rows == 0 || cols == 0 { return; }
        let cw = rect.width() as f32 / cols as f32;
        let ch = rect.height() as f32 / rows as f32;

        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        for i in 0..rows {
            // row 0 is y_min, drawn at the bottom
            let bottom = rect.bottom as f32 - i as f32 * ch;
            for (j, &z) in self.grid.z_row(i).iter().enumerate() {
                let color = if z.is_finite() {
                    let [r, g, b] = opts.colormap.sample_range(z, self.z_axis.min, self.z_axis.max);
                    skia::Color::from_rgb(r, g, b)
                } else {
                    opts.theme.no_data
                };
                paint.set_color(color);
                let left = rect.left as f32 + j as f32 * cw;
                // overlap by a pixel fraction to avoid seams
                canvas.draw_rect(skia::Rect::from_ltrb(left, bottom - ch - 0.5, left + cw + 0.5, bottom), &paint);
            }
        }

        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(opts.theme.axis_line);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);
        let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        canvas.draw_line((l, b), (r, b), &axis_paint);
        canvas.draw_line((l, t), (l, b), &axis_paint);

        if opts.draw_labels {
            let c = opts.theme.axis_label;
            draw_text(canvas, &self.x_axis.label, (r - 80.0, b + 24.0), 14.0, c);
            draw_text(canvas, &self.y_axis.label, (l - 48.0, t + 14.0), 14.0, c);
            draw_text(canvas, &format!("{:.3}", self.x_axis.min), (l, b + 24.0), 12.0, c);
            draw_text(canvas, &format!("{:.3}", self.y_axis.min), (l - 48.0, b), 12.0, c);
        }
    }

    fn draw_color_scale(&self, canvas: &skia::Canvas, rect: &RectI32, opts: &RenderOptions) {
        let left = rect.right as f32 + 32.0;
        let width = 16.0f32;
        let (top, bottom) = (rect.top as f32, rect.bottom as f32);
        let steps = 64;
        let h = (bottom - top) / steps as f32;

        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        for k in 0..steps {
            let [r, g, b] = opts.colormap.sample((k as f64 + 0.5) / steps as f64);
            paint.set_color(skia::Color::from_rgb(r, g, b));
            let y1 = bottom - k as f32 * h;
            canvas.draw_rect(skia::Rect::from_ltrb(left, y1 - h - 0.5, left + width, y1), &paint);
        }

        if opts.draw_labels {
            let c = opts.theme.axis_label;
            let x = left + width + 6.0;
            draw_text(canvas, &format!("{:.3}", self.z_axis.max), (x, top + 10.0), 12.0, c);
            draw_text(canvas, &format!("{:.3}", self.z_axis.min), (x, bottom), 12.0, c);
            draw_text(canvas, &self.z_axis.label, (left, top - 8.0), 14.0, c);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Floor outline and floor grid lines at the bottom of the view box.
fn draw_floor(canvas: &skia::Canvas, cam: &Camera, map: &ScreenMap, theme: &Theme) {
    let at = |u: f64, v: f64| map.to_px(&cam.project(u, v, -0.5));

    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);
    for s in linspace(-0.5, 0.5, 6) {
        canvas.draw_line(at(s, -0.5), at(s, 0.5), &grid);
        canvas.draw_line(at(-0.5, s), at(0.5, s), &grid);
    }

    let mut axis = skia::Paint::default();
    axis.set_color(theme.axis_line);
    axis.set_anti_alias(true);
    axis.set_stroke_width(1.5);
    let corners = [at(-0.5, -0.5), at(0.5, -0.5), at(0.5, 0.5), at(-0.5, 0.5)];
    for k in 0..4 {
        canvas.draw_line(corners[k], corners[(k + 1) % 4], &axis);
    }
    // vertical z edge at the far left corner
    canvas.draw_line(at(-0.5, 0.5), map.to_px(&cam.project(-0.5, 0.5, 0.5)), &axis);
}

fn draw_text(canvas: &skia::Canvas, text: &str, at: (f32, f32), size: f32, color: skia::Color) {
    if text.is_empty() { return; }
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(text, at, &font, &paint);
}
