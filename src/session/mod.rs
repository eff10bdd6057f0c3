mod project;
mod session;

pub use project::{project_session, DisplayGroup, DisplayRow};
pub use session::{
    storage_key, ItemMeasurements, MeasuredContent, MeasurementGroup, MeasurementSession,
    SessionState,
};
