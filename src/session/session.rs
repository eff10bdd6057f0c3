use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{
    classify_structure, family_for_role, family_of, relevant_for_role, relevant_measurements,
    ClassificationInput, GarmentFamily, GarmentStructure, ItemRole, StructureDecision,
};
use crate::geometry::{resolve_geometry, LandmarkPayload, MeasurementGeometry};
use crate::grading::{
    build_initial_matrix, regrade, repair_uniform_rows, CalibrationContext,
    MeasurementValueMatrix, SeedValues, StandardTable,
};
use crate::types::{Audience, GridSelection, MeasurementId, SizeCategory, UserGridPreference};

/// Where a session is in its life, from fresh base image to persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Classified,
    GeometryReady,
    Populated,
    Edited,
    Saved,
}

/// Geometry plus values for one garment piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMeasurements {
    pub geometry: Vec<MeasurementGeometry>,
    pub values: MeasurementValueMatrix,
}

/// One piece of a composite garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementGroup {
    pub id: ItemRole,
    pub label: String,
    pub geometry: Vec<MeasurementGeometry>,
    pub values: MeasurementValueMatrix,
}

/// Measured content handed to `MeasurementSession::compose`.
#[derive(Debug, Clone)]
pub enum MeasuredContent {
    Single(ItemMeasurements),
    Groups(Vec<MeasurementGroup>),
}

/// Stable key for persisting one session per grid choice.
pub fn storage_key(audience: Audience, size_category: SizeCategory) -> String {
    format!("{}_{}", audience.to_str(), size_category.to_str())
}

/// The aggregate the rest of the system persists and exchanges: immutable
/// line geometry plus one value matrix (or one pair per item group), the
/// active grid choice, the active size, and the auto-grading flag.
///
/// Exactly one of `single_item`/`groups` is ever populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSession {
    base_image_ref: String,
    audience: Audience,
    size_category: SizeCategory,
    active_size: String,
    auto_grading: bool,
    state: SessionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    structure: Option<StructureDecision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    family: Option<GarmentFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    single_item: Option<ItemMeasurements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groups: Option<Vec<MeasurementGroup>>,
}

impl MeasurementSession {
    /// Fresh session for a newly accepted base image.
    pub fn new(base_image_ref: impl Into<String>, preference: UserGridPreference) -> Self {
        let selection = GridSelection::resolve(preference);
        Self {
            base_image_ref: base_image_ref.into(),
            audience: preference.audience,
            size_category: preference.size_category,
            active_size: selection.grid().anchor_label().to_string(),
            auto_grading: true,
            state: SessionState::Empty,
            structure: None,
            family: None,
            single_item: None,
            groups: None,
        }
    }

    /// Assemble a populated session from already-built parts.
    pub fn compose(
        base_image_ref: impl Into<String>,
        preference: UserGridPreference,
        decision: StructureDecision,
        content: MeasuredContent,
    ) -> Result<Self> {
        let mut session = Self::new(base_image_ref, preference);
        session.structure = Some(decision);
        match (decision.structure, content) {
            (GarmentStructure::Single, MeasuredContent::Single(item)) => {
                session.single_item = Some(item);
            }
            (GarmentStructure::Single, MeasuredContent::Groups(_)) => {
                bail!("[MeasurementSession.compose] single garment cannot carry groups");
            }
            (_, MeasuredContent::Groups(groups)) => {
                ensure!(
                    groups.len() == 2,
                    "[MeasurementSession.compose] composite garments carry exactly two groups, got {}",
                    groups.len()
                );
                session.groups = Some(groups);
            }
            (_, MeasuredContent::Single(_)) => {
                bail!("[MeasurementSession.compose] composite garment needs per-item groups");
            }
        }
        session.state = SessionState::Populated;
        session.validate()?;
        Ok(session)
    }

    #[inline] pub fn base_image_ref(&self) -> &str { &self.base_image_ref }

    #[inline] pub fn audience(&self) -> Audience { self.audience }

    #[inline] pub fn size_category(&self) -> SizeCategory { self.size_category }

    #[inline] pub fn active_size(&self) -> &str { &self.active_size }

    #[inline] pub fn auto_grading(&self) -> bool { self.auto_grading }

    #[inline] pub fn state(&self) -> SessionState { self.state }

    #[inline] pub fn structure(&self) -> Option<StructureDecision> { self.structure }

    #[inline] pub fn single_item(&self) -> Option<&ItemMeasurements> { self.single_item.as_ref() }

    #[inline] pub fn groups(&self) -> Option<&[MeasurementGroup]> { self.groups.as_deref() }

    /// The resolved grid for this session's audience/category.
    pub fn selection(&self) -> GridSelection {
        GridSelection::resolve(UserGridPreference::new(self.audience, self.size_category))
    }

    /// Key under which the caller persists this session.
    pub fn storage_key(&self) -> String {
        storage_key(self.audience, self.size_category)
    }

    /// Key a caller would use for a different grid choice, when probing its
    /// store before `switch_grid`.
    pub fn rekey(&self, preference: UserGridPreference) -> String {
        preference.storage_key()
    }

    /// A landmark result is only applicable while its source image is still
    /// the session's base image; anything else is stale and must be dropped.
    pub fn accepts_landmarks(&self, image_ref: &str) -> bool {
        self.base_image_ref == image_ref
    }

    /// Record the garment classification. Allowed until geometry exists;
    /// after that the image must be replaced to reclassify.
    pub fn classify(&mut self, input: &ClassificationInput) -> Result<StructureDecision> {
        ensure!(
            self.state <= SessionState::Classified,
            "[MeasurementSession.classify] geometry already resolved; replace the image to reclassify"
        );
        let decision = classify_structure(input);
        self.structure = Some(decision);
        self.family = Some(family_of(input.category.as_deref(), input.product_type.as_deref()));
        self.state = SessionState::Classified;
        Ok(decision)
    }

    /// Fix line geometry for every relevant measurement, from landmarks where
    /// detected and authored defaults everywhere else.
    pub fn resolve_measurements(&mut self, landmarks: Option<&LandmarkPayload>) -> Result<()> {
        ensure!(
            matches!(self.state, SessionState::Classified | SessionState::GeometryReady),
            "[MeasurementSession.resolve_measurements] classification required before geometry"
        );
        let decision = self
            .structure
            .context("[MeasurementSession.resolve_measurements] missing structure decision")?;

        match decision.structure {
            GarmentStructure::Single => {
                let family = self.family.unwrap_or(GarmentFamily::Top);
                let relevant = relevant_measurements(family);
                self.single_item = Some(ItemMeasurements {
                    geometry: resolve_geometry(landmarks, family, &relevant),
                    values: MeasurementValueMatrix::new(),
                });
                self.groups = None;
            }
            structure => {
                let groups = ItemRole::ALL
                    .iter()
                    .map(|&role| {
                        let family = family_for_role(structure, role);
                        let relevant = relevant_for_role(structure, role);
                        MeasurementGroup {
                            id: role,
                            label: role.label().to_string(),
                            geometry: resolve_geometry(landmarks, family, &relevant),
                            values: MeasurementValueMatrix::new(),
                        }
                    })
                    .collect();
                self.groups = Some(groups);
                self.single_item = None;
            }
        }
        self.state = SessionState::GeometryReady;
        Ok(())
    }

    /// Fill the value matrix for the active grid, one pipeline per item.
    pub fn populate(
        &mut self,
        seeds: &SeedValues,
        table: &dyn StandardTable,
        calibration: Option<CalibrationContext>,
        landmarks: Option<&LandmarkPayload>,
    ) -> Result<()> {
        ensure!(
            self.state >= SessionState::GeometryReady,
            "[MeasurementSession.populate] geometry must be resolved first"
        );
        let selection = self.selection();

        if let Some(item) = self.single_item.as_mut() {
            item.values =
                build_initial_matrix(&item.geometry, seeds, &selection, table, calibration, landmarks);
            repair_uniform_rows(&mut item.values, &selection, table);
        } else if let Some(groups) = self.groups.as_mut() {
            for group in groups.iter_mut() {
                group.values = build_initial_matrix(
                    &group.geometry,
                    seeds,
                    &selection,
                    table,
                    calibration,
                    landmarks,
                );
                repair_uniform_rows(&mut group.values, &selection, table);
            }
        } else {
            bail!("[MeasurementSession.populate] session has no measured content");
        }
        self.state = SessionState::Populated;
        Ok(())
    }

    /// Apply a user edit to one cell. Editing the active size with
    /// auto-grading on regrades every other size from the edit; any other
    /// edit stays local.
    pub fn edit_value(
        &mut self,
        role: Option<ItemRole>,
        id: MeasurementId,
        size: &str,
        cm: f64,
    ) -> Result<()> {
        ensure!(
            self.state >= SessionState::Populated,
            "[MeasurementSession.edit_value] matrix not populated"
        );
        let selection = self.selection();
        ensure!(
            selection.grid().contains(size),
            "[MeasurementSession.edit_value] size '{size}' is not in the active grid"
        );

        let auto_grading = self.auto_grading;
        let active_size = self.active_size.clone();
        let values = self.values_mut(role)?;
        values.set_manual(id, size, cm);
        if auto_grading && size == active_size {
            *values = regrade(values, selection.grid(), &active_size, true);
        }
        self.state = SessionState::Edited;
        Ok(())
    }

    /// Change which size the seller is viewing.
    pub fn set_active_size(&mut self, size: &str) -> Result<()> {
        ensure!(
            self.selection().grid().contains(size),
            "[MeasurementSession.set_active_size] size '{size}' is not in the active grid"
        );
        self.active_size = size.to_string();
        Ok(())
    }

    /// Turning auto-grading off freezes all sizes at their current values.
    pub fn set_auto_grading(&mut self, enabled: bool) {
        self.auto_grading = enabled;
    }

    /// Mark the session as persisted by the caller.
    pub fn mark_saved(&mut self) -> Result<()> {
        ensure!(
            self.state >= SessionState::Populated,
            "[MeasurementSession.mark_saved] nothing to save before the matrix is populated"
        );
        self.state = SessionState::Saved;
        Ok(())
    }

    /// Replace the base image, discarding everything derived from the old
    /// one. Grid choice and the auto-grading toggle survive.
    pub fn replace_image(&mut self, base_image_ref: impl Into<String>) {
        self.base_image_ref = base_image_ref.into();
        self.structure = None;
        self.family = None;
        self.single_item = None;
        self.groups = None;
        self.state = SessionState::Empty;
        self.active_size = self.selection().grid().anchor_label().to_string();
    }

    /// Move to a different audience/grid. A snapshot previously saved under
    /// the new key is restored as-is; with none, a measured session drops
    /// back to `Classified` (values are grid-specific, classification is
    /// not) and an unmeasured one just changes preference.
    pub fn switch_grid(
        self,
        preference: UserGridPreference,
        saved: Option<MeasurementSession>,
    ) -> Result<MeasurementSession> {
        if let Some(prior) = saved {
            ensure!(
                prior.audience == preference.audience
                    && prior.size_category == preference.size_category,
                "[MeasurementSession.switch_grid] saved session was keyed for a different grid"
            );
            ensure!(
                prior.base_image_ref == self.base_image_ref,
                "[MeasurementSession.switch_grid] saved session belongs to a different base image"
            );
            prior.validate()?;
            return Ok(prior);
        }

        let mut next = self;
        next.audience = preference.audience;
        next.size_category = preference.size_category;
        next.active_size = next.selection().grid().anchor_label().to_string();
        if next.state >= SessionState::GeometryReady {
            next.single_item = None;
            next.groups = None;
            next.state = SessionState::Classified;
        }
        Ok(next)
    }

    /// Check the invariants a snapshot must satisfy.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !(self.single_item.is_some() && self.groups.is_some()),
            "[MeasurementSession.validate] session holds both a single item and groups"
        );
        if let Some(groups) = &self.groups {
            ensure!(
                groups.len() == 2,
                "[MeasurementSession.validate] composite sessions carry exactly two groups, got {}",
                groups.len()
            );
        }
        if self.state >= SessionState::GeometryReady {
            ensure!(
                self.single_item.is_some() || self.groups.is_some(),
                "[MeasurementSession.validate] measured state without measured content"
            );
        }
        ensure!(
            self.selection().grid().contains(&self.active_size),
            "[MeasurementSession.validate] active size '{}' is not in the active grid",
            self.active_size
        );
        Ok(())
    }

    /// Serialize for the caller's storage document.
    pub fn to_document(&self) -> Result<String> {
        serde_json::to_string(self).context("[MeasurementSession.to_document] serialization failed")
    }

    /// Restore a previously stored snapshot, re-checking its invariants.
    pub fn from_document(document: &str) -> Result<Self> {
        let session: MeasurementSession = serde_json::from_str(document)
            .context("[MeasurementSession.from_document] malformed snapshot")?;
        session.validate()?;
        Ok(session)
    }

    fn values_mut(&mut self, role: Option<ItemRole>) -> Result<&mut MeasurementValueMatrix> {
        match (self.single_item.as_mut(), self.groups.as_mut(), role) {
            (Some(item), None, None) => Ok(&mut item.values),
            (Some(_), None, Some(_)) => {
                bail!("[MeasurementSession.edit_value] single garment takes no item role")
            }
            (None, Some(groups), Some(role)) => groups
                .iter_mut()
                .find(|group| group.id == role)
                .map(|group| &mut group.values)
                .with_context(|| {
                    format!("[MeasurementSession.edit_value] no '{}' group", role.to_str())
                }),
            (None, Some(_), None) => {
                bail!("[MeasurementSession.edit_value] composite garment needs an item role")
            }
            _ => bail!("[MeasurementSession.edit_value] session has no measured content"),
        }
    }
}
