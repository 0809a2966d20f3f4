use std::sync::Arc;

use crate::color::ColorTheme;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Session – one user's filter state and memoized filtered view
// ---------------------------------------------------------------------------

/// Per-session context. Owns the session's [`FilterState`] and the memoized
/// filtered view; the dataset itself is shared read-only across sessions.
pub struct Session {
    dataset: Arc<PenguinDataset>,

    /// Current filter selections, mutated by the sidebar widgets.
    pub filters: FilterState,

    /// Filter state the cached view was computed from. `None` until the
    /// first read, and after a dataset swap.
    cached_filters: Option<FilterState>,

    /// Row indices of the cached view.
    cached_rows: Vec<usize>,

    /// Error message shown in the top bar (failed File → Open).
    pub status_message: Option<String>,
}

impl Session {
    pub fn new(dataset: Arc<PenguinDataset>) -> Self {
        Session {
            dataset,
            filters: FilterState::default(),
            cached_filters: None,
            cached_rows: Vec::new(),
            status_message: None,
        }
    }

    pub fn dataset(&self) -> &PenguinDataset {
        &self.dataset
    }

    /// Swap in a newly loaded dataset. Filter selections survive the swap;
    /// the cached view does not.
    pub fn set_dataset(&mut self, dataset: PenguinDataset) {
        self.dataset = Arc::new(dataset);
        self.cached_filters = None;
        self.cached_rows.clear();
        self.status_message = None;
    }

    /// The filtered view: indices of rows passing the current filters, in
    /// dataset order.
    ///
    /// Memoized on the row-selecting filter fields, compared by value: a
    /// repeated read with an unchanged species set and mass threshold
    /// returns the cached rows without recomputation, and a color-theme
    /// change alone does not invalidate.
    pub fn filtered(&mut self) -> &[usize] {
        let stale = self
            .cached_filters
            .as_ref()
            .is_none_or(|cached| !cached.same_selection(&self.filters));
        if stale {
            log::debug!(
                "recomputing filtered view: {} species, mass < {}",
                self.filters.species.len(),
                self.filters.max_body_mass
            );
            self.cached_rows = filtered_indices(&self.dataset, &self.filters);
            self.cached_filters = Some(self.filters.clone());
        }
        &self.cached_rows
    }

    // ---- Filter mutators (cache staleness is detected on read) ----

    /// Toggle one species in the selection.
    pub fn toggle_species(&mut self, species: &Species) {
        if !self.filters.species.remove(species) {
            self.filters.species.insert(species.clone());
        }
    }

    /// Select all known species.
    pub fn select_all_species(&mut self) {
        self.filters.species = Species::known().into_iter().collect();
    }

    /// Deselect every species (the view becomes empty, not an error).
    pub fn select_no_species(&mut self) {
        self.filters.species.clear();
    }

    pub fn set_max_body_mass(&mut self, mass: f64) {
        self.filters.max_body_mass = mass;
    }

    pub fn set_color_theme(&mut self, theme: ColorTheme) {
        self.filters.color_theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Arc<PenguinDataset> {
        let rec = |species: Species, mass: f64| Record {
            species,
            island: "Dream".to_string(),
            bill_length_mm: Some(42.0),
            bill_depth_mm: Some(18.0),
            body_mass_g: Some(mass),
        };
        Arc::new(PenguinDataset::from_records(vec![
            rec(Species::Adelie, 3500.0),
            rec(Species::Gentoo, 5200.0),
            rec(Species::Chinstrap, 3800.0),
        ]))
    }

    #[test]
    fn repeated_reads_hit_the_cache() {
        let mut session = Session::new(dataset());
        assert_eq!(session.filtered(), &[0, 1, 2]);

        // Tamper with the cached rows; an unchanged filter state must return
        // them verbatim, proving the memoized path was taken.
        session.cached_rows.push(999);
        assert_eq!(session.filtered(), &[0, 1, 2, 999]);
    }

    #[test]
    fn predicate_change_invalidates_the_cache() {
        let mut session = Session::new(dataset());
        session.filtered();
        session.cached_rows.push(999);

        session.set_max_body_mass(4000.0);
        assert_eq!(session.filtered(), &[0, 2]);

        session.cached_rows.push(999);
        session.toggle_species(&Species::Adelie);
        assert_eq!(session.filtered(), &[2]);
    }

    #[test]
    fn theme_change_does_not_invalidate_the_cache() {
        let mut session = Session::new(dataset());
        session.filtered();
        session.cached_rows.push(999);

        session.set_color_theme(ColorTheme::Set3);
        assert_eq!(session.filtered(), &[0, 1, 2, 999]);
    }

    #[test]
    fn select_none_then_all_roundtrips() {
        let mut session = Session::new(dataset());
        session.select_no_species();
        assert!(session.filtered().is_empty());

        session.select_all_species();
        assert_eq!(session.filtered(), &[0, 1, 2]);
    }

    #[test]
    fn dataset_swap_resets_the_cache() {
        let mut session = Session::new(dataset());
        session.filtered();
        session.cached_rows.push(999);

        session.set_dataset(PenguinDataset::from_records(Vec::new()));
        assert!(session.filtered().is_empty());
    }
}
