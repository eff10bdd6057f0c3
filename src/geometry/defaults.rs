//! Hand-authored line positions, used when landmarks are missing and for the
//! dress family, whose proportions are reliable enough to skip landmarks.

use crate::classify::GarmentFamily;
use crate::types::MeasurementId;

use super::line::MeasurementGeometry;

/// Authored position for a measurement line, per family.
///
/// Values are percentages tuned against the catalog's standard product shots
/// (front-facing, garment centered, head to mid-thigh or full body in frame).
pub(super) fn authored_line(family: GarmentFamily, id: MeasurementId) -> MeasurementGeometry {
    use GarmentFamily::*;
    use MeasurementId::*;

    let (start, end) = match (family, id) {
        (Dress, Bust) => ((30.0, 28.0), (70.0, 28.0)),
        (Dress, Waist) => ((32.0, 42.0), (68.0, 42.0)),
        (Dress, Hip) => ((29.0, 56.0), (71.0, 56.0)),
        (Dress, Length) => ((50.0, 10.0), (50.0, 92.0)),

        (Top, Bust) => ((28.0, 32.0), (72.0, 32.0)),
        (Top, Waist) => ((31.0, 46.0), (69.0, 46.0)),
        (Top, Hip) => ((30.0, 58.0), (70.0, 58.0)),
        (Top, Length) => ((50.0, 12.0), (50.0, 64.0)),

        (Bottoms, Bust) => ((30.0, 14.0), (70.0, 14.0)),
        (Bottoms, Waist) => ((33.0, 24.0), (67.0, 24.0)),
        (Bottoms, Hip) => ((30.0, 38.0), (70.0, 38.0)),
        (Bottoms, Length) => ((50.0, 22.0), (50.0, 88.0)),

        (SwimBottom, Bust) => ((30.0, 20.0), (70.0, 20.0)),
        (SwimBottom, Waist) => ((32.0, 34.0), (68.0, 34.0)),
        (SwimBottom, Hip) => ((30.0, 46.0), (70.0, 46.0)),
        (SwimBottom, Length) => ((50.0, 30.0), (50.0, 72.0)),

        (Baby, Bust) => ((32.0, 30.0), (68.0, 30.0)),
        (Baby, Waist) => ((33.0, 44.0), (67.0, 44.0)),
        (Baby, Hip) => ((32.0, 54.0), (68.0, 54.0)),
        (Baby, Length) => ((50.0, 16.0), (50.0, 74.0)),
    };

    MeasurementGeometry::new(id, start, end)
}
