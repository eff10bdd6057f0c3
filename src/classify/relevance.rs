use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::types::MeasurementId;

use super::structure::{GarmentStructure, ItemRole};
use super::vocab;

/// Ordered set of measurement ids; never more than the four the engine knows.
pub type RelevantMeasurements = SmallVec<[MeasurementId; 4]>;

/// Garment family, the coarse shape that decides which measurements apply and
/// which default line positions fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentFamily {
    Top,
    Bottoms,
    SwimBottom,
    Dress,
    Baby,
}

/// Derive the family from the upstream category/type text. Checked most
/// specific first; anything unrecognized lands on `Top`, whose measurement
/// slice is the safe default.
pub fn family_of(category: Option<&str>, product_type: Option<&str>) -> GarmentFamily {
    let text = format!("{} {}", category.unwrap_or(""), product_type.unwrap_or(""));

    if vocab::BABY_FAMILY.is_match(&text) {
        GarmentFamily::Baby
    } else if vocab::DRESS_FAMILY.is_match(&text) {
        GarmentFamily::Dress
    } else if vocab::SWIM_BOTTOM_FAMILY.is_match(&text) {
        GarmentFamily::SwimBottom
    } else if vocab::BOTTOMS_FAMILY.is_match(&text) {
        GarmentFamily::Bottoms
    } else {
        GarmentFamily::Top
    }
}

/// Which measurements a single garment of this family carries.
pub fn relevant_measurements(family: GarmentFamily) -> RelevantMeasurements {
    use MeasurementId::*;
    match family {
        GarmentFamily::SwimBottom => smallvec![Hip, Length],
        GarmentFamily::Bottoms => smallvec![Waist, Hip, Length],
        GarmentFamily::Dress => smallvec![Bust, Waist, Hip, Length],
        GarmentFamily::Top => smallvec![Bust, Length],
        GarmentFamily::Baby => smallvec![Length],
    }
}

/// Which measurements one item of a composite garment carries. Bikini bottoms
/// sit on the hip; set bottoms are regular bottoms and keep the waist.
pub fn relevant_for_role(structure: GarmentStructure, role: ItemRole) -> RelevantMeasurements {
    use MeasurementId::*;
    match (structure, role) {
        (_, ItemRole::Top) => smallvec![Bust, Length],
        (GarmentStructure::BikiniSet, ItemRole::Bottom) => smallvec![Hip, Length],
        (_, ItemRole::Bottom) => smallvec![Waist, Hip, Length],
    }
}

/// Family used for an item's default geometry.
pub fn family_for_role(structure: GarmentStructure, role: ItemRole) -> GarmentFamily {
    match (structure, role) {
        (_, ItemRole::Top) => GarmentFamily::Top,
        (GarmentStructure::BikiniSet, ItemRole::Bottom) => GarmentFamily::SwimBottom,
        (_, ItemRole::Bottom) => GarmentFamily::Bottoms,
    }
}
