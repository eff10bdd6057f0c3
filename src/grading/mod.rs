mod calibration;
mod grade;
mod matrix;
mod standards;

pub use calibration::CalibrationContext;
pub use grade::{build_initial_matrix, regrade, repair_uniform_rows, resolve_display, Badge, SeedValues};
pub use matrix::{Cell, CellSource, MeasurementValueMatrix};
pub use standards::{BrStandardTable, StandardMeasurements, StandardTable};
