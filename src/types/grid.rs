use serde::{Deserialize, Serialize};

use super::audience::{Audience, SizeCategory};

/// An ordered, disjoint enumeration of size labels.
///
/// Grids are static: switching audience or category selects a different grid,
/// it never reorders or renames an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeGrid {
    labels: &'static [&'static str],
}

impl SizeGrid {
    /// Neutral fallback grid used when the audience/category pair is unknown.
    pub const DEFAULT: SizeGrid = SizeGrid { labels: &["PP", "P", "M", "G", "GG"] };

    /// Look up the grid for an audience/category pair, if one is defined.
    pub fn resolve(audience: Audience, category: SizeCategory) -> Option<SizeGrid> {
        let labels: &'static [&'static str] = match (audience, category) {
            (Audience::Female, SizeCategory::Standard) => &["PP", "P", "M", "G", "GG"],
            (Audience::Female, SizeCategory::Plus) => &["G1", "G2", "G3", "G4", "G5"],
            (Audience::Female, SizeCategory::Numeric) => &["36", "38", "40", "42", "44", "46"],
            (Audience::Male, SizeCategory::Standard) => &["P", "M", "G", "GG", "XG"],
            (Audience::Male, SizeCategory::Numeric) => &["38", "40", "42", "44", "46", "48"],
            (Audience::Kids, SizeCategory::Baby) => &["RN", "3M", "6M", "9M", "12M"],
            (Audience::Kids, SizeCategory::KidsNumeric) => &["2", "4", "6", "8"],
            (Audience::Kids, SizeCategory::Teen) => &["10", "12", "14", "16"],
            _ => return None,
        };
        Some(SizeGrid { labels })
    }

    #[inline] pub fn labels(&self) -> &'static [&'static str] { self.labels }

    #[inline] pub fn len(&self) -> usize { self.labels.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Position of a label in the grid's natural order.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|&l| l == label)
    }

    #[inline] pub fn contains(&self, label: &str) -> bool { self.index_of(label).is_some() }

    /// Middle position of the grid, used as the grading reference point.
    #[inline] pub fn anchor_index(&self) -> usize { self.labels.len() / 2 }

    #[inline] pub fn anchor_label(&self) -> &'static str { self.labels[self.anchor_index()] }
}

/// Caller-supplied grid choice. The engine never reads ambient storage for
/// a "last used" grid; the caller passes this in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGridPreference {
    pub audience: Audience,
    pub size_category: SizeCategory,
}

impl UserGridPreference {
    pub fn new(audience: Audience, size_category: SizeCategory) -> Self {
        Self { audience, size_category }
    }

    /// Stable storage key for persisting one session per grid choice.
    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.audience.to_str(), self.size_category.to_str())
    }
}

/// A resolved grid choice: the preference plus the grid it maps to, and
/// whether that mapping was defined or fell back to the neutral default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSelection {
    audience: Audience,
    size_category: SizeCategory,
    grid: SizeGrid,
    known: bool,
}

impl GridSelection {
    /// Resolve a preference, falling back to the default grid when the pair
    /// is undefined. Table lookups are disabled on the fallback path so an
    /// unknown grid never borrows another audience's values.
    pub fn resolve(preference: UserGridPreference) -> Self {
        match SizeGrid::resolve(preference.audience, preference.size_category) {
            Some(grid) => Self {
                audience: preference.audience,
                size_category: preference.size_category,
                grid,
                known: true,
            },
            None => {
                log::debug!(
                    "[grid] no grid for {}/{}, using default",
                    preference.audience.to_str(),
                    preference.size_category.to_str()
                );
                Self {
                    audience: preference.audience,
                    size_category: preference.size_category,
                    grid: SizeGrid::DEFAULT,
                    known: false,
                }
            }
        }
    }

    #[inline] pub fn audience(&self) -> Audience { self.audience }

    #[inline] pub fn size_category(&self) -> SizeCategory { self.size_category }

    #[inline] pub fn grid(&self) -> SizeGrid { self.grid }

    /// Standard-table lookups only make sense for a grid the table knows.
    #[inline] pub fn lookups_enabled(&self) -> bool { self.known }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn female_standard_grid() {
        let grid = SizeGrid::resolve(Audience::Female, SizeCategory::Standard).unwrap();
        assert_eq!(grid.labels(), &["PP", "P", "M", "G", "GG"]);
        assert_eq!(grid.anchor_index(), 2);
        assert_eq!(grid.anchor_label(), "M");
    }

    #[test]
    fn baby_grid_anchor() {
        let grid = SizeGrid::resolve(Audience::Kids, SizeCategory::Baby).unwrap();
        assert_eq!(grid.labels(), &["RN", "3M", "6M", "9M", "12M"]);
        assert_eq!(grid.anchor_label(), "6M");
    }

    #[test]
    fn index_follows_natural_order() {
        let grid = SizeGrid::resolve(Audience::Female, SizeCategory::Numeric).unwrap();
        assert_eq!(grid.index_of("36"), Some(0));
        assert_eq!(grid.index_of("46"), Some(5));
        assert_eq!(grid.index_of("35"), None);
    }

    #[test]
    fn unknown_pair_has_no_grid() {
        assert_eq!(SizeGrid::resolve(Audience::Male, SizeCategory::Baby), None);
        assert_eq!(SizeGrid::resolve(Audience::Female, SizeCategory::Teen), None);
    }

    #[test]
    fn unknown_pair_falls_back_with_lookups_disabled() {
        let pref = UserGridPreference::new(Audience::Male, SizeCategory::Baby);
        let selection = GridSelection::resolve(pref);
        assert_eq!(selection.grid(), SizeGrid::DEFAULT);
        assert!(!selection.lookups_enabled());
    }

    #[test]
    fn known_pair_enables_lookups() {
        let pref = UserGridPreference::new(Audience::Kids, SizeCategory::Teen);
        let selection = GridSelection::resolve(pref);
        assert_eq!(selection.grid().labels(), &["10", "12", "14", "16"]);
        assert!(selection.lookups_enabled());
    }

    #[test]
    fn storage_key_shape() {
        let pref = UserGridPreference::new(Audience::Female, SizeCategory::KidsNumeric);
        assert_eq!(pref.storage_key(), "female_kids_numeric");
    }
}
