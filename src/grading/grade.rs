use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::geometry::{LandmarkPayload, MeasurementGeometry};
use crate::types::{GridSelection, MeasurementId, SizeGrid};

use super::calibration::CalibrationContext;
use super::matrix::{Cell, CellSource, MeasurementValueMatrix};
use super::standards::StandardTable;

/// Reference values anchored at the grid's median size, per measurement:
/// the analysis estimate when one exists, else a generic garment default.
#[derive(Debug, Clone, Default)]
pub struct SeedValues {
    values: AHashMap<MeasurementId, f64>,
}

impl SeedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: MeasurementId, cm: f64) -> Self {
        self.values.insert(id, cm);
        self
    }

    pub fn get(&self, id: MeasurementId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    /// Fallback anchor when neither calibration nor an estimate exists.
    pub fn generic_for(id: MeasurementId) -> f64 {
        match id {
            MeasurementId::Bust => 90.0,
            MeasurementId::Waist => 70.0,
            MeasurementId::Hip => 96.0,
            MeasurementId::Length => 60.0,
        }
    }
}

/// Linear step away from the anchor index, clamped at zero.
fn graded(base: f64, index: usize, anchor: usize, id: MeasurementId) -> f64 {
    let offset = index as f64 - anchor as f64;
    (base + offset * id.grading_step()).max(0.0)
}

/// Fill a value for every (measurement, size) pair of the active grid.
///
/// Per cell, in priority order: the calibrated pixel measurement (anchor size
/// only: the photo depicts one garment at one size, so calibration fixes the
/// reference cell and everything else falls through the chain), then the
/// standard table, then linear extrapolation from the anchor value. The
/// result has no holes.
pub fn build_initial_matrix(
    geometry: &[MeasurementGeometry],
    seeds: &SeedValues,
    selection: &GridSelection,
    table: &dyn StandardTable,
    calibration: Option<CalibrationContext>,
    landmarks: Option<&LandmarkPayload>,
) -> MeasurementValueMatrix {
    let grid = selection.grid();
    let anchor = grid.anchor_index();
    let mut matrix = MeasurementValueMatrix::new();

    for line in geometry {
        let id = line.id;
        let calibrated = match (calibration, landmarks) {
            (Some(context), Some(payload)) => context.measure(payload, id),
            _ => None,
        };
        let base = calibrated
            .or_else(|| seeds.get(id))
            .unwrap_or_else(|| SeedValues::generic_for(id));

        for (index, &size) in grid.labels().iter().enumerate() {
            if index == anchor {
                if let Some(cm) = calibrated {
                    matrix.set(id, size, cm, CellSource::Calibrated);
                    continue;
                }
            }
            let standard = if selection.lookups_enabled() {
                table.measurements(selection.audience(), size).and_then(|row| row.get(id))
            } else {
                None
            };
            match standard {
                Some(cm) => matrix.set(id, size, cm, CellSource::Standard),
                None => matrix.set(id, size, graded(base, index, anchor, id), CellSource::Estimated),
            }
        }
    }

    matrix
}

/// Re-derive every size from one reference size's value.
///
/// Pure: returns the regraded matrix, derives only from `base_size` (never
/// from another derived size), and leaves the reference cell untouched. With
/// auto-grading off the matrix is returned unchanged, freezing all sizes.
pub fn regrade(
    matrix: &MeasurementValueMatrix,
    grid: SizeGrid,
    base_size: &str,
    auto_grading: bool,
) -> MeasurementValueMatrix {
    if !auto_grading {
        return matrix.clone();
    }
    let Some(base_index) = grid.index_of(base_size) else {
        return matrix.clone();
    };

    let mut out = matrix.clone();
    for id in matrix.measurement_ids() {
        let Some(base_cell) = matrix.get(id, base_size) else { continue };
        for (index, &size) in grid.labels().iter().enumerate() {
            if index == base_index {
                continue;
            }
            out.set(id, size, graded(base_cell.cm, index, base_index, id), CellSource::Estimated);
        }
    }
    out
}

/// Re-derive flat rows from the standard table.
///
/// A row holding one identical value across the whole grid means the upstream
/// data degenerated; it is never a legitimate outcome. Returns the number of
/// rows repaired. Rows stay untouched when lookups are disabled or the table
/// has no values for the measurement.
pub fn repair_uniform_rows(
    matrix: &mut MeasurementValueMatrix,
    selection: &GridSelection,
    table: &dyn StandardTable,
) -> usize {
    if !selection.lookups_enabled() {
        return 0;
    }
    let grid = selection.grid();
    let mut repaired = 0;

    for id in matrix.measurement_ids() {
        if !matrix.is_uniform_across(id, grid) {
            continue;
        }
        let mut wrote = false;
        for &size in grid.labels() {
            if let Some(cm) =
                table.measurements(selection.audience(), size).and_then(|row| row.get(id))
            {
                matrix.set(id, size, cm, CellSource::Standard);
                wrote = true;
            }
        }
        if wrote {
            repaired += 1;
            log::debug!("[grading] rederived flat {} row from standard table", id.to_str());
        }
    }
    repaired
}

/// Badge shown next to a displayed value, naming the tier that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Calibrated,
    Standard,
    Estimated,
    None,
}

fn badge_for(source: CellSource) -> Badge {
    match source {
        CellSource::Calibrated => Badge::Calibrated,
        CellSource::Standard => Badge::Standard,
        CellSource::Estimated => Badge::Estimated,
        // User-entered values carry no badge.
        CellSource::Manual => Badge::None,
    }
}

/// What the user sees for one cell.
///
/// Narrower than the fill chain on purpose: a saved cell above zero always
/// wins, so a manual edit is never overwritten by a table lookup on
/// re-render. Then the exact-size table value, then the analysis estimate,
/// otherwise blank.
pub fn resolve_display(
    saved: Option<Cell>,
    table_value: Option<f64>,
    seed: Option<f64>,
) -> (Option<f64>, Badge) {
    if let Some(cell) = saved {
        if cell.cm > 0.0 {
            return (Some(cell.cm), badge_for(cell.source));
        }
    }
    if let Some(cm) = table_value {
        return (Some(cm), Badge::Standard);
    }
    if let Some(cm) = seed {
        return (Some(cm), Badge::Estimated);
    }
    (None, Badge::None)
}
