mod audience;
mod grid;
mod measurement;

pub use audience::{Audience, SizeCategory};
pub use grid::{GridSelection, SizeGrid, UserGridPreference};
pub use measurement::{Axis, MeasurementId};
