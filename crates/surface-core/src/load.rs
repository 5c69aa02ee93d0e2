// File: crates/surface-core/src/load.rs
// Summary: Delimited-text loader for X/Y/Z sample tables.

use std::io::Read;
use std::path::Path;

use crate::error::{Result, SurfaceError};
use crate::types::{SamplePoint, SampleSet};

/// Column names every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["X", "Y", "Z"];

/// Sample table illustrating the expected input layout.
pub const EXAMPLE_DATA: &str = "\
X,Y,Z
0,0,0
0,1,1
0,2,4
1,0,1
1,1,2
1,2,5
2,0,4
2,1,5
2,2,6
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Load samples from a CSV/TXT file with a header row naming `X`, `Y`, `Z`.
pub fn load_samples(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<SampleSet> {
    let file = std::fs::File::open(path.as_ref())?;
    load_samples_from_reader(file, opts)
}

/// Same as [`load_samples`] over any reader.
///
/// Header names are matched exactly after trimming surrounding whitespace;
/// other columns are ignored. Every data row must hold finite numbers in all
/// three columns.
pub fn load_samples_from_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<SampleSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    let positions = REQUIRED_COLUMNS.map(|name| headers.iter().position(|h| h == name));

    let cols: [usize; 3] = match positions {
        [Some(x), Some(y), Some(z)] => [x, y, z],
        _ => {
            let missing = REQUIRED_COLUMNS
                .iter()
                .zip(positions)
                .filter_map(|(&name, pos)| pos.is_none().then_some(name))
                .collect();
            return Err(SurfaceError::MissingColumns { missing, found: headers });
        }
    };

    let mut samples = SampleSet::default();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = n + 1;
        let mut v = [0.0f64; 3];
        for (slot, (&col, name)) in v.iter_mut().zip(cols.iter().zip(REQUIRED_COLUMNS)) {
            let raw = rec.get(col).unwrap_or("");
            *slot = parse_real(raw).ok_or_else(|| SurfaceError::InvalidValue {
                row,
                column: name,
                value: raw.to_string(),
            })?;
        }
        samples.push(SamplePoint::new(v[0], v[1], v[2]));
    }

    if samples.is_empty() {
        return Err(SurfaceError::EmptyInput);
    }
    tracing::debug!(rows = samples.len(), "loaded samples");
    Ok(samples)
}

fn parse_real(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
