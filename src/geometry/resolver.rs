use crate::classify::GarmentFamily;
use crate::types::{Axis, MeasurementId};

use super::defaults::authored_line;
use super::landmarks::{LandmarkPair, LandmarkPayload};
use super::line::MeasurementGeometry;

/// Fix the on-image line for every relevant measurement.
///
/// Returns exactly one line per id in `relevant`, in order: an id without a
/// usable landmark pair gets the family's authored default instead of being
/// dropped, since a missing line would silently lose its value column.
/// Deterministic: identical inputs produce identical geometry.
pub fn resolve_geometry(
    landmarks: Option<&LandmarkPayload>,
    family: GarmentFamily,
    relevant: &[MeasurementId],
) -> Vec<MeasurementGeometry> {
    relevant
        .iter()
        .map(|&id| {
            // Dresses and jumpsuits follow standard proportions closely
            // enough that authored positions beat detected ones.
            if family == GarmentFamily::Dress {
                return authored_line(family, id);
            }
            match landmarks.and_then(|payload| payload.pair(id)) {
                Some(pair) => line_from_pair(id, pair),
                None => authored_line(family, id),
            }
        })
        .collect()
}

/// Straighten a detected pair into a single axis-aligned line: the cross-axis
/// midpoint becomes both endpoints' coordinate, so the line sits at the same
/// height (or column) as the anatomical pair.
fn line_from_pair(id: MeasurementId, pair: LandmarkPair) -> MeasurementGeometry {
    match id.axis() {
        Axis::Horizontal => {
            let y = pct((pair.start.y + pair.end.y) / 2.0);
            MeasurementGeometry::new(id, (pct(pair.start.x), y), (pct(pair.end.x), y))
        }
        Axis::Vertical => {
            let x = pct((pair.start.x + pair.end.x) / 2.0);
            MeasurementGeometry::new(id, (x, pct(pair.start.y)), (x, pct(pair.end.y)))
        }
    }
}

#[inline]
fn pct(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}
