// File: crates/surface-core/src/dedup.rs
// Summary: Duplicate-location reduction (mean of z per exact (x, y)).

use std::collections::HashMap;

use crate::types::{ReducedSampleSet, SamplePoint, SampleSet};

/// Collapse samples sharing an exact `(x, y)` into one point whose `z` is the mean.
/// Output keeps the first-seen order of each location. Near-equal coordinates are not merged.
pub fn reduce_duplicates(samples: &SampleSet) -> ReducedSampleSet {
    let mut slots: HashMap<(u64, u64), usize> = HashMap::with_capacity(samples.len());
    // (x, y, sum z, count)
    let mut groups: Vec<(f64, f64, f64, usize)> = Vec::with_capacity(samples.len());

    for p in samples.points() {
        let key = (location_bits(p.x), location_bits(p.y));
        match slots.get(&key) {
            Some(&slot) => {
                let g = &mut groups[slot];
                g.2 += p.z;
                g.3 += 1;
            }
            None => {
                slots.insert(key, groups.len());
                groups.push((p.x, p.y, p.z, 1));
            }
        }
    }

    let merged = samples.len() - groups.len();
    if merged > 0 {
        tracing::debug!(merged, locations = groups.len(), "averaged duplicate sample locations");
    }

    let points = groups
        .into_iter()
        .map(|(x, y, sum, n)| SamplePoint::new(x, y, sum / n as f64))
        .collect();
    ReducedSampleSet::from_unique(points)
}

// -0.0 == 0.0, so both must hash to the same slot.
#[inline]
fn location_bits(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
