use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{MeasurementId, SizeGrid};

/// Which priority tier produced a cell's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellSource {
    Calibrated,
    Manual,
    Standard,
    Estimated,
}

/// One resolved value in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cm: f64,
    pub source: CellSource,
}

/// Centimeter values per measurement per size, with provenance.
///
/// A populated matrix holds a cell for every (measurement in the geometry,
/// size in the active grid) pair; values are never negative. Rows are
/// `BTreeMap`s so the serialized snapshot is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementValueMatrix {
    rows: BTreeMap<MeasurementId, BTreeMap<String, Cell>>,
}

/// The edit surface is a form field: junk and negative input clamp to zero,
/// they never fail.
fn clamp_cm(cm: f64) -> f64 {
    if cm.is_finite() && cm > 0.0 { cm } else { 0.0 }
}

impl MeasurementValueMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Measurement ids with at least one cell, in id order.
    pub fn measurement_ids(&self) -> Vec<MeasurementId> {
        self.rows.keys().copied().collect()
    }

    pub fn get(&self, id: MeasurementId, size: &str) -> Option<Cell> {
        self.rows.get(&id)?.get(size).copied()
    }

    pub fn value(&self, id: MeasurementId, size: &str) -> Option<f64> {
        self.get(id, size).map(|cell| cell.cm)
    }

    /// Write one cell, clamping the value.
    pub fn set(&mut self, id: MeasurementId, size: &str, cm: f64, source: CellSource) {
        self.rows
            .entry(id)
            .or_default()
            .insert(size.to_string(), Cell { cm: clamp_cm(cm), source });
    }

    /// Write a user-entered value.
    pub fn set_manual(&mut self, id: MeasurementId, size: &str, cm: f64) {
        self.set(id, size, cm, CellSource::Manual);
    }

    /// True when every size in the grid holds the same value for `id`.
    /// A sign the upstream data degenerated to one flat number; see
    /// `repair_uniform_rows`.
    pub fn is_uniform_across(&self, id: MeasurementId, grid: SizeGrid) -> bool {
        let Some(row) = self.rows.get(&id) else { return false };
        if grid.len() < 2 {
            return false;
        }
        let mut values = grid.labels().iter().map(|&size| row.get(size).map(|cell| cell.cm));
        let Some(Some(first)) = values.next() else { return false };
        values.all(|value| value == Some(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Audience, SizeCategory};
    use MeasurementId::*;

    fn standard_grid() -> SizeGrid {
        SizeGrid::resolve(Audience::Female, SizeCategory::Standard).unwrap()
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut matrix = MeasurementValueMatrix::new();
        matrix.set(Bust, "M", 90.0, CellSource::Standard);
        assert_eq!(matrix.value(Bust, "M"), Some(90.0));
        assert_eq!(matrix.get(Bust, "M").unwrap().source, CellSource::Standard);
        assert_eq!(matrix.value(Bust, "G"), None);
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        let mut matrix = MeasurementValueMatrix::new();
        matrix.set_manual(Waist, "P", -12.0);
        assert_eq!(matrix.value(Waist, "P"), Some(0.0));
    }

    #[test]
    fn non_numeric_input_clamps_to_zero() {
        let mut matrix = MeasurementValueMatrix::new();
        matrix.set_manual(Waist, "P", f64::NAN);
        assert_eq!(matrix.value(Waist, "P"), Some(0.0));
    }

    #[test]
    fn uniform_row_detection() {
        let grid = standard_grid();
        let mut matrix = MeasurementValueMatrix::new();
        for size in grid.labels() {
            matrix.set(Bust, size, 44.0, CellSource::Estimated);
        }
        assert!(matrix.is_uniform_across(Bust, grid));

        matrix.set(Bust, "G", 94.0, CellSource::Manual);
        assert!(!matrix.is_uniform_across(Bust, grid));
    }

    #[test]
    fn incomplete_row_is_not_uniform() {
        let grid = standard_grid();
        let mut matrix = MeasurementValueMatrix::new();
        matrix.set(Hip, "PP", 88.0, CellSource::Standard);
        matrix.set(Hip, "P", 88.0, CellSource::Standard);
        assert!(!matrix.is_uniform_across(Hip, grid));
    }

    #[test]
    fn absent_row_is_not_uniform() {
        let matrix = MeasurementValueMatrix::new();
        assert!(!matrix.is_uniform_across(Length, standard_grid()));
    }
}
