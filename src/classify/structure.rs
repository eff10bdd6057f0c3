use serde::{Deserialize, Serialize};

use super::vocab;

/// Seller-editable text describing the garment. Any field may be absent;
/// classification works on whatever is there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ClassificationInput {
    /// The category/type pair as reported by the upstream classifier.
    fn classification_text(&self) -> String {
        let mut text = String::new();
        for field in [&self.category, &self.product_type].into_iter().flatten() {
            text.push_str(field);
            text.push(' ');
        }
        text
    }

    /// Seller free text: name, description, tags.
    fn free_text(&self) -> String {
        let mut text = String::new();
        for field in [&self.name, &self.description].into_iter().flatten() {
            text.push_str(field);
            text.push(' ');
        }
        for tag in &self.tags {
            text.push_str(tag);
            text.push(' ');
        }
        text
    }

    fn full_text(&self) -> String {
        format!("{} {}", self.classification_text(), self.free_text())
    }
}

/// Whether the listing is one garment or two co-sold pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentStructure {
    Single,
    BikiniSet,
    TopBottomSet,
}

impl GarmentStructure {
    #[inline]
    pub fn is_composite(&self) -> bool {
        !matches!(self, GarmentStructure::Single)
    }
}

/// Item slot within a composite garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRole {
    Top,
    Bottom,
}

impl ItemRole {
    pub const ALL: [ItemRole; 2] = [ItemRole::Top, ItemRole::Bottom];

    pub fn to_str(&self) -> &'static str {
        match self {
            ItemRole::Top => "top",
            ItemRole::Bottom => "bottom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemRole::Top => "Parte de cima",
            ItemRole::Bottom => "Parte de baixo",
        }
    }
}

/// Classification outcome. `low_confidence` marks decisions made by the
/// weakest promotion rule so callers can surface them for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDecision {
    pub structure: GarmentStructure,
    pub low_confidence: bool,
}

impl StructureDecision {
    fn confident(structure: GarmentStructure) -> Self {
        Self { structure, low_confidence: false }
    }
}

/// Decide whether the listing is a single garment or a composite, using an
/// ordered rule list over the seller's text. Ambiguity resolves to the safest
/// answer (`Single`) rather than failing.
pub fn classify_structure(input: &ClassificationInput) -> StructureDecision {
    let full = input.full_text();
    let free = input.free_text();

    // Swim vocabulary wins outright, unless negated by one-piece wording.
    if vocab::BIKINI.is_match(&full) && !vocab::ONE_PIECE.is_match(&full) {
        return StructureDecision::confident(GarmentStructure::BikiniSet);
    }

    let has_top = vocab::TOP_TERMS.is_match(&full);
    let has_bottom = vocab::BOTTOM_TERMS.is_match(&full);

    // Explicit set wording with both halves named.
    if vocab::SET.is_match(&full) && has_top && has_bottom {
        return StructureDecision::confident(GarmentStructure::TopBottomSet);
    }

    // Both halves named in free text even without set wording: the upstream
    // classifier under-reports type often enough that co-occurrence alone is
    // treated as composite.
    if vocab::TOP_TERMS.is_match(&free) && vocab::BOTTOM_TERMS.is_match(&free) {
        return StructureDecision::confident(GarmentStructure::TopBottomSet);
    }

    // A bare "short" classification whose free text talks about a top piece.
    // Weakest rule: marketing copy can name a top without selling one.
    if vocab::SHORT_ONLY.is_match(input.product_type.as_deref().unwrap_or(""))
        && vocab::TOP_TERMS.is_match(&free)
    {
        log::debug!("[classify] short-only type promoted to set by free-text top terms");
        return StructureDecision { structure: GarmentStructure::TopBottomSet, low_confidence: true };
    }

    StructureDecision::confident(GarmentStructure::Single)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(product_type: &str, name: &str, description: &str) -> ClassificationInput {
        ClassificationInput {
            category: None,
            product_type: (!product_type.is_empty()).then(|| product_type.to_string()),
            tags: Vec::new(),
            description: (!description.is_empty()).then(|| description.to_string()),
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    #[test]
    fn empty_input_is_single() {
        let decision = classify_structure(&ClassificationInput::default());
        assert_eq!(decision.structure, GarmentStructure::Single);
        assert!(!decision.low_confidence);
    }

    #[test]
    fn bikini_wins_over_set_wording() {
        let decision = classify_structure(&input("", "Conjunto biquíni cortininha", ""));
        assert_eq!(decision.structure, GarmentStructure::BikiniSet);
    }

    #[test]
    fn unaccented_bikini_matches() {
        let decision = classify_structure(&input("biquini", "", ""));
        assert_eq!(decision.structure, GarmentStructure::BikiniSet);
    }

    #[test]
    fn one_piece_negates_swim_vocabulary() {
        let decision = classify_structure(&input("", "Maiô bikini-style recortes", ""));
        assert_ne!(decision.structure, GarmentStructure::BikiniSet);
    }

    #[test]
    fn set_with_both_halves_is_top_bottom() {
        let decision = classify_structure(&input("", "conjunto cropped e short", ""));
        assert_eq!(decision.structure, GarmentStructure::TopBottomSet);
        assert!(!decision.low_confidence);
    }

    #[test]
    fn co_occurrence_without_set_wording_is_composite() {
        let decision = classify_structure(&input("", "Blusa alça fina com short linho", ""));
        assert_eq!(decision.structure, GarmentStructure::TopBottomSet);
    }

    #[test]
    fn short_only_type_with_cropped_copy_is_low_confidence_set() {
        let decision = classify_structure(&input("short", "", "acompanha cropped de amarrar"));
        assert_eq!(decision.structure, GarmentStructure::TopBottomSet);
        assert!(decision.low_confidence);
    }

    #[test]
    fn short_only_type_alone_stays_single() {
        let decision = classify_structure(&input("short", "Short jeans cintura alta", ""));
        assert_eq!(decision.structure, GarmentStructure::Single);
    }

    #[test]
    fn plain_dress_is_single() {
        let decision = classify_structure(&input("vestido", "Vestido midi floral", ""));
        assert_eq!(decision.structure, GarmentStructure::Single);
    }
}
