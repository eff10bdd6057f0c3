mod relevance;
mod structure;
mod vocab;

pub use relevance::{
    family_for_role, family_of, relevant_for_role, relevant_measurements, GarmentFamily,
    RelevantMeasurements,
};
pub use structure::{classify_structure, ClassificationInput, GarmentStructure, ItemRole, StructureDecision};
