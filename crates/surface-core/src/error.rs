// File: crates/surface-core/src/error.rs
// Summary: Error kinds for loading, gridding, interpolation, and rendering.

use thiserror::Error;

use crate::types::GridAxis;

pub type Result<T> = std::result::Result<T, SurfaceError>;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("missing required column(s) {missing:?}; found {found:?}")]
    MissingColumns {
        missing: Vec<&'static str>,
        found: Vec<String>,
    },

    #[error("row {row}: column {column} value {value:?} is not a finite real number")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("no samples to interpolate")]
    EmptyInput,

    #[error("sample {index} has a non-finite location ({x}, {y})")]
    NonFiniteCoordinate {
        index: usize,
        x: f64,
        y: f64,
    },

    #[error("all {samples} samples share {axis} = {value}; cannot span a 2-D grid")]
    DegenerateDomain {
        axis: GridAxis,
        value: f64,
        samples: usize,
    },

    #[error("grid resolution must be at least 2, got {0}")]
    InvalidResolution(usize),

    #[error("interpolation over {samples} samples failed")]
    InterpolationFailure {
        samples: usize,
        #[source]
        source: NumericalError,
    },

    #[error("failed to read samples: {0}")]
    Csv(#[from] csv::Error),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Numerical breakdowns inside the interpolation kernel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericalError {
    #[error("gradient estimate at vertex {vertex} is not finite")]
    NonFiniteGradient { vertex: usize },
}
