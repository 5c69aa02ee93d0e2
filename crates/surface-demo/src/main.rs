// File: crates/surface-demo/src/main.rs
// Summary: CLI loads an X/Y/Z CSV/TXT table, interpolates it onto a regular grid, and renders a surface PNG.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use surface_core::{
    load_samples, theme, Camera, Colormap, GridInterpolator, GridOptions, LoadOptions, PlotStyle, RenderOptions,
    SurfacePlot, DEFAULT_RESOLUTION, EXAMPLE_DATA,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "surface-plot", about = "Interpolate scattered X/Y/Z samples and render a surface plot")]
struct Args {
    /// Data file (CSV or TXT) with a header row naming X, Y and Z
    #[arg(required_unless_present = "example_format")]
    file: Option<PathBuf>,

    /// Print the expected data format and exit
    #[arg(long)]
    example_format: bool,

    #[arg(long, default_value = "")]
    x_title: String,
    #[arg(long, default_value = "")]
    y_title: String,
    #[arg(long, default_value = "")]
    z_title: String,

    /// Grid nodes per axis
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: usize,

    /// surface | heatmap
    #[arg(long, default_value = "surface")]
    style: String,

    /// dark | light | slate
    #[arg(long, default_value = "dark")]
    theme: String,

    /// viridis | greys
    #[arg(long, default_value = "viridis")]
    colormap: String,

    #[arg(long, default_value_t = 45.0)]
    azimuth: f64,
    #[arg(long, default_value_t = 30.0)]
    elevation: f64,

    /// Field delimiter of the input table
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Normalise coordinates to unit extent before interpolating
    #[arg(long)]
    rescale: bool,

    /// Hide the color scale bar
    #[arg(long)]
    no_scale: bool,

    /// Output PNG path (default: target/out/surface_<stem>.png)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.example_format {
        print!("{}", example_format_text());
        return Ok(());
    }
    let Some(raw) = args.file.as_deref() else {
        anyhow::bail!("no data file given");
    };

    let (path, used_alt) = resolve_path(raw)?;
    info!("Using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.txt)");
    }

    let delimiter = u8::try_from(args.delimiter).context("delimiter must be a single-byte character")?;
    let samples = load_samples(&path, &LoadOptions { delimiter })
        .with_context(|| format!("failed to load samples from '{}'", path.display()))?;
    info!("Loaded {} samples", samples.len());

    let interpolator = GridInterpolator::new(
        GridOptions::default().with_resolution(args.resolution).with_rescale(args.rescale),
    );
    let reduced = GridInterpolator::reduce_duplicates(&samples);
    if reduced.len() < samples.len() {
        info!("Averaged duplicates: {} distinct locations", reduced.len());
    }
    let grid = interpolator.build_grid(&reduced).context("failed to interpolate samples")?;
    info!(
        "Grid {}x{}: {} of {} nodes inside the sample hull",
        grid.rows(),
        grid.cols(),
        grid.defined_count(),
        grid.rows() * grid.cols()
    );

    let mut opts = RenderOptions::default();
    opts.style = PlotStyle::find(&args.style).with_context(|| format!("unknown style '{}'", args.style))?;
    opts.colormap = Colormap::find(&args.colormap).with_context(|| format!("unknown colormap '{}'", args.colormap))?;
    opts.theme = theme::find(&args.theme);
    opts.camera = Camera::new(args.azimuth, args.elevation);
    opts.show_scale = !args.no_scale;

    let plot = SurfacePlot::new(grid).with_titles(args.x_title, args.y_title, args.z_title);
    let out = args.out.unwrap_or_else(|| out_name_for(&path));
    plot.render_to_png(&opts, &out)
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

fn example_format_text() -> String {
    format!(
        "Example Data Format:\n\n{EXAMPLE_DATA}\n\
         Ensure that your data file contains columns X, Y, and Z with each row representing a sample point. \
         The data should be in CSV or TXT format.\n"
    )
}

/// Resolve path, trying the .csv/.txt sibling if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

/// Produce output file name like target/out/surface_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("surface.png");
    } else {
        out.push(format!("surface_{}.png", stem));
    }
    out
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "txt" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("txt");
            Some(alt)
        }
        _ => None,
    }
}
