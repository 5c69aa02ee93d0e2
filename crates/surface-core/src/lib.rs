// File: crates/surface-core/src/lib.rs
// Summary: Core library entry point; exports the gridding API and surface rendering.

pub mod types;
pub mod error;
pub mod load;
pub mod dedup;
pub mod grid;
pub mod triangulation;
pub mod clough_tocher;
pub mod interpolate;
pub mod axis;
pub mod colormap;
pub mod geometry;
pub mod theme;
pub mod view;
pub mod plot;

pub use types::{GridAxis, ReducedSampleSet, SamplePoint, SampleSet};
pub use error::{NumericalError, Result, SurfaceError};
pub use load::{load_samples, load_samples_from_reader, LoadOptions, EXAMPLE_DATA};
pub use dedup::reduce_duplicates;
pub use grid::{linspace, Grid};
pub use interpolate::{build_grid, GridInterpolator, GridOptions, DEFAULT_RESOLUTION};
pub use axis::Axis;
pub use colormap::Colormap;
pub use theme::Theme;
pub use view::Camera;
pub use plot::{PlotStyle, RenderOptions, SurfacePlot};
