#![doc = "Garment measurement and size-grading engine public API"]
mod classify;
mod geometry;
mod grading;
mod session;
mod types;

#[doc(inline)]
pub use types::{Audience, Axis, GridSelection, MeasurementId, SizeCategory, SizeGrid, UserGridPreference};

#[doc(inline)]
pub use classify::{
    classify_structure, family_for_role, family_of, relevant_for_role, relevant_measurements,
    ClassificationInput, GarmentFamily, GarmentStructure, ItemRole, RelevantMeasurements,
    StructureDecision,
};

#[doc(inline)]
pub use geometry::{resolve_geometry, LandmarkPair, LandmarkPayload, MeasurementGeometry, Point};

#[doc(inline)]
pub use grading::{
    build_initial_matrix, regrade, repair_uniform_rows, resolve_display, Badge, BrStandardTable,
    CalibrationContext, Cell, CellSource, MeasurementValueMatrix, SeedValues, StandardMeasurements,
    StandardTable,
};

#[doc(inline)]
pub use session::{
    project_session, storage_key, DisplayGroup, DisplayRow, ItemMeasurements, MeasuredContent,
    MeasurementGroup, MeasurementSession, SessionState,
};
