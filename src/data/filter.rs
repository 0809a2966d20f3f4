use std::collections::BTreeSet;

use crate::color::ColorTheme;

use super::model::{PenguinDataset, Record, Species};

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// Body-mass slider range and step, in grams.
pub const MASS_MIN: f64 = 2000.0;
pub const MASS_MAX: f64 = 6000.0;
pub const MASS_STEP: f64 = 100.0;

/// One session's filter selections. Two of the three fields are predicates
/// over the dataset; `color_theme` only parametrizes the plot renderer and
/// has no effect on which rows are visible.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Species currently selected in the sidebar. Empty set → empty view.
    pub species: BTreeSet<Species>,
    /// Rows with `body_mass_g` at or above this threshold are hidden.
    pub max_body_mass: f64,
    /// Palette token passed through to the scatter plot.
    pub color_theme: ColorTheme,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            species: Species::known().into_iter().collect(),
            max_body_mass: MASS_MAX,
            color_theme: ColorTheme::Husl,
        }
    }
}

impl FilterState {
    /// Whether a single record passes both predicates. A missing body mass
    /// fails the mass comparison, and the comparison is strict: a mass equal
    /// to the threshold is excluded.
    pub fn matches(&self, record: &Record) -> bool {
        self.species.contains(&record.species)
            && record
                .body_mass_g
                .is_some_and(|mass| mass < self.max_body_mass)
    }

    /// Whether `other` selects the same rows as `self`. Used as the cache
    /// key comparison for the memoized view: the color theme is deliberately
    /// ignored here.
    pub fn same_selection(&self, other: &FilterState) -> bool {
        self.species == other.species && self.max_body_mass == other.max_body_mass
    }
}

// ---------------------------------------------------------------------------
// Filtered view calculator
// ---------------------------------------------------------------------------

/// Return indices of records passing the current filters, in dataset order.
/// Pure over its inputs; memoization lives in [`crate::state::Session`].
pub fn filtered_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(record))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(species: Species, mass: Option<f64>) -> Record {
        Record {
            species,
            island: "Biscoe".to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            body_mass_g: mass,
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::from_records(vec![
            rec(Species::Adelie, Some(3500.0)),
            rec(Species::Gentoo, Some(5200.0)),
            rec(Species::Chinstrap, Some(3800.0)),
            rec(Species::Adelie, None),
            rec(Species::Gentoo, Some(4000.0)),
            rec(Species::Other("Emperor".to_string()), Some(3000.0)),
        ])
    }

    #[test]
    fn default_state_keeps_all_known_species_below_max() {
        let ds = dataset();
        let rows = filtered_indices(&ds, &FilterState::default());
        // Row 3 has no mass, row 5 is an unknown species.
        assert_eq!(rows, vec![0, 1, 2, 4]);
    }

    #[test]
    fn every_kept_row_satisfies_both_predicates() {
        let ds = dataset();
        let filters = FilterState {
            species: [Species::Gentoo].into_iter().collect(),
            max_body_mass: 5000.0,
            ..FilterState::default()
        };
        let rows = filtered_indices(&ds, &filters);
        assert_eq!(rows, vec![4]);
        for &i in &rows {
            assert!(i < ds.len());
            assert!(filters.matches(&ds.records()[i]));
        }
    }

    #[test]
    fn mass_threshold_is_strict() {
        let ds = PenguinDataset::from_records(vec![
            rec(Species::Adelie, Some(3499.0)),
            rec(Species::Adelie, Some(3500.0)),
            rec(Species::Adelie, Some(3501.0)),
        ]);
        let filters = FilterState {
            max_body_mass: 3500.0,
            ..FilterState::default()
        };
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);
    }

    #[test]
    fn missing_mass_fails_the_comparison() {
        let ds = PenguinDataset::from_records(vec![rec(Species::Adelie, None)]);
        assert!(filtered_indices(&ds, &FilterState::default()).is_empty());
    }

    #[test]
    fn empty_species_set_yields_empty_view() {
        let ds = dataset();
        let filters = FilterState {
            species: BTreeSet::new(),
            ..FilterState::default()
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn minimum_threshold_yields_empty_view() {
        let ds = dataset();
        let filters = FilterState {
            max_body_mass: MASS_MIN,
            ..FilterState::default()
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn dataset_order_is_preserved() {
        let ds = dataset();
        let rows = filtered_indices(&ds, &FilterState::default());
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn theme_change_does_not_change_selection() {
        let a = FilterState::default();
        let b = FilterState {
            color_theme: ColorTheme::Deep,
            ..a.clone()
        };
        assert!(a.same_selection(&b));
        assert_ne!(a, b);

        let c = FilterState {
            max_body_mass: 4200.0,
            ..a.clone()
        };
        assert!(!a.same_selection(&c));
    }
}
