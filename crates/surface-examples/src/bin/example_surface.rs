// File: crates/surface-examples/src/bin/example_surface.rs
// Summary: Minimal example that grids the built-in example table and renders both plot styles to PNG.

use surface_core::{
    load_samples_from_reader, GridInterpolator, LoadOptions, PlotStyle, RenderOptions, SurfacePlot, EXAMPLE_DATA,
};

fn main() {
    let samples = load_samples_from_reader(EXAMPLE_DATA.as_bytes(), &LoadOptions::default())
        .expect("example data loads");
    let grid = GridInterpolator::default().interpolate(&samples).expect("example data grids");

    let plot = SurfacePlot::new(grid).with_titles("X", "Y", "Z");
    for (style, name) in [(PlotStyle::Surface, "surface"), (PlotStyle::Heatmap, "heatmap")] {
        let mut opts = RenderOptions::default();
        opts.style = style;
        let out = std::path::PathBuf::from(format!("target/out/example_{name}.png"));
        plot.render_to_png(&opts, &out).expect("render to png");
        println!("Wrote {}", out.display());
    }
}
