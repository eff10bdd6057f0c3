use serde::{Deserialize, Serialize};

use crate::geometry::LandmarkPayload;
use crate::types::MeasurementId;

/// Pixel scale established from a known-size reference object in the
/// canonical front photo. Present at most once per product; applies only to
/// measurements whose landmarks were detected on that same photo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationContext {
    pub pixels_per_cm: f64,
}

impl CalibrationContext {
    pub fn new(pixels_per_cm: f64) -> Self {
        Self { pixels_per_cm }
    }

    /// Physical length of a detected landmark pair, in centimeters.
    pub fn measure(&self, payload: &LandmarkPayload, id: MeasurementId) -> Option<f64> {
        if !(self.pixels_per_cm.is_finite() && self.pixels_per_cm > 0.0) {
            return None;
        }
        let pixels = payload.pixel_distance(id)?;
        Some(pixels / self.pixels_per_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn payload() -> LandmarkPayload {
        let mut payload = LandmarkPayload::new().with_image_size(1000.0, 1500.0);
        payload.insert("waist_start", Point { x: 30.0, y: 48.0 });
        payload.insert("waist_end", Point { x: 50.0, y: 48.0 });
        payload
    }

    #[test]
    fn converts_pixels_to_centimeters() {
        // 200px pair at 10px/cm.
        let calibration = CalibrationContext::new(10.0);
        assert_eq!(calibration.measure(&payload(), MeasurementId::Waist), Some(20.0));
    }

    #[test]
    fn undetected_pair_measures_nothing() {
        let calibration = CalibrationContext::new(10.0);
        assert_eq!(calibration.measure(&payload(), MeasurementId::Bust), None);
    }

    #[test]
    fn degenerate_scale_measures_nothing() {
        assert_eq!(CalibrationContext::new(0.0).measure(&payload(), MeasurementId::Waist), None);
        assert_eq!(CalibrationContext::new(-2.0).measure(&payload(), MeasurementId::Waist), None);
    }
}
