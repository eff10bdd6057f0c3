use serde::Serialize;

use crate::classify::ItemRole;
use crate::geometry::MeasurementGeometry;
use crate::grading::{resolve_display, Badge, MeasurementValueMatrix, SeedValues, StandardTable};

use super::session::MeasurementSession;

/// One row of the measurement list shown for the active size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: Option<f64>,
    pub unit: &'static str,
    pub badge: Badge,
}

/// Rows for one garment piece; `role` is `None` for single garments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGroup {
    pub role: Option<ItemRole>,
    pub label: Option<String>,
    pub rows: Vec<DisplayRow>,
}

/// Project the session onto what the seller sees for the active size: one
/// ordered row per measurement line, with the badge naming the tier that
/// produced the shown value.
pub fn project_session(
    session: &MeasurementSession,
    table: &dyn StandardTable,
    seeds: &SeedValues,
) -> Vec<DisplayGroup> {
    let selection = session.selection();
    let active_size = session.active_size();
    let table_row = if selection.lookups_enabled() {
        table.measurements(selection.audience(), active_size)
    } else {
        None
    };

    let rows = |geometry: &[MeasurementGeometry], values: &MeasurementValueMatrix| -> Vec<DisplayRow> {
        geometry
            .iter()
            .map(|line| {
                let (value, badge) = resolve_display(
                    values.get(line.id, active_size),
                    table_row.and_then(|row| row.get(line.id)),
                    seeds.get(line.id),
                );
                DisplayRow { label: line.id.label(), value, unit: "cm", badge }
            })
            .collect()
    };

    if let Some(item) = session.single_item() {
        vec![DisplayGroup { role: None, label: None, rows: rows(&item.geometry, &item.values) }]
    } else if let Some(groups) = session.groups() {
        groups
            .iter()
            .map(|group| DisplayGroup {
                role: Some(group.id),
                label: Some(group.label.clone()),
                rows: rows(&group.geometry, &group.values),
            })
            .collect()
    } else {
        Vec::new()
    }
}
