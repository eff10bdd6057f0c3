use serde::{Deserialize, Serialize};

/// Body measurements the engine knows how to position and grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementId {
    Bust,
    Waist,
    Hip,
    Length,
}

/// Drawing axis for a measurement line on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl MeasurementId {
    pub const ALL: [MeasurementId; 4] = [
        MeasurementId::Bust,
        MeasurementId::Waist,
        MeasurementId::Hip,
        MeasurementId::Length,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            MeasurementId::Bust => "bust",
            MeasurementId::Waist => "waist",
            MeasurementId::Hip => "hip",
            MeasurementId::Length => "length",
        }
    }

    /// Display label shown next to the measurement line.
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementId::Bust => "Busto",
            MeasurementId::Waist => "Cintura",
            MeasurementId::Hip => "Quadril",
            MeasurementId::Length => "Comprimento",
        }
    }

    /// Circumference lines run across the garment, length runs down it.
    pub fn axis(&self) -> Axis {
        match self {
            MeasurementId::Length => Axis::Vertical,
            _ => Axis::Horizontal,
        }
    }

    /// Centimeters added (or removed) per size step when grading from a
    /// reference size.
    pub fn grading_step(&self) -> f64 {
        match self {
            MeasurementId::Length => 1.5,
            _ => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circumferences_are_horizontal() {
        assert_eq!(MeasurementId::Bust.axis(), Axis::Horizontal);
        assert_eq!(MeasurementId::Waist.axis(), Axis::Horizontal);
        assert_eq!(MeasurementId::Hip.axis(), Axis::Horizontal);
        assert_eq!(MeasurementId::Length.axis(), Axis::Vertical);
    }

    #[test]
    fn length_grades_slower_than_circumferences() {
        assert_eq!(MeasurementId::Length.grading_step(), 1.5);
        for id in [MeasurementId::Bust, MeasurementId::Waist, MeasurementId::Hip] {
            assert_eq!(id.grading_step(), 2.0);
        }
    }

    #[test]
    fn serializes_to_lowercase_name() {
        let json = serde_json::to_string(&MeasurementId::Waist).unwrap();
        assert_eq!(json, "\"waist\"");
        let back: MeasurementId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MeasurementId::Waist);
    }
}
