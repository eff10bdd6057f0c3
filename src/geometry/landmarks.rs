use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::MeasurementId;

/// A point in percentage coordinates (0..=100) of the base image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The two anatomical endpoints a measurement line is inferred from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPair {
    pub start: Point,
    pub end: Point,
}

/// Named anatomical points detected on the base image, as delivered by the
/// vision boundary. Any subset of pairs may be absent.
///
/// The payload optionally carries the image's pixel dimensions; without them
/// a calibrated pixel distance cannot be computed and the calibration tier is
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<f64>,
    #[serde(flatten)]
    points: BTreeMap<String, Point>,
}

/// Wire names for a measurement's point pair.
fn point_names(id: MeasurementId) -> (&'static str, &'static str) {
    match id {
        MeasurementId::Bust => ("bust_start", "bust_end"),
        MeasurementId::Waist => ("waist_start", "waist_end"),
        MeasurementId::Hip => ("hip_start", "hip_end"),
        MeasurementId::Length => ("length_top", "length_bottom"),
    }
}

impl LandmarkPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the image's pixel dimensions.
    pub fn with_image_size(mut self, width: f64, height: f64) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }

    /// Insert a named point. Unknown names are kept verbatim; pairing only
    /// looks at the names the engine defines.
    pub fn insert(&mut self, name: impl Into<String>, point: Point) {
        self.points.insert(name.into(), point);
    }

    /// Both endpoints for a measurement, if the vision pass found them.
    pub fn pair(&self, id: MeasurementId) -> Option<LandmarkPair> {
        let (start_name, end_name) = point_names(id);
        Some(LandmarkPair {
            start: *self.points.get(start_name)?,
            end: *self.points.get(end_name)?,
        })
    }

    /// Distance between a measurement's endpoints in image pixels. Requires
    /// both the pair and the image dimensions.
    pub fn pixel_distance(&self, id: MeasurementId) -> Option<f64> {
        let pair = self.pair(id)?;
        let (width, height) = (self.image_width?, self.image_height?);
        let dx = (pair.end.x - pair.start.x) / 100.0 * width;
        let dy = (pair.end.y - pair.start.y) / 100.0 * height;
        Some(dx.hypot(dy))
    }
}
