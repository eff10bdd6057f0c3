use serde::{Deserialize, Serialize};

use crate::types::MeasurementId;

/// A fixed measurement line on the base image.
///
/// Coordinates are percentages (0..=100) of the image. Geometry encodes where
/// the line is drawn, never a value: for a given image and classification it
/// stays identical across every size in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementGeometry {
    pub id: MeasurementId,
    pub label: String,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl MeasurementGeometry {
    pub(crate) fn new(id: MeasurementId, start: (f64, f64), end: (f64, f64)) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
        }
    }
}
