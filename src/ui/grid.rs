use std::cmp::Ordering;

use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{PenguinDataset, Record};

// ---------------------------------------------------------------------------
// Sortable data grid over the filtered view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Species,
    Island,
    BillLength,
    BillDepth,
    BodyMass,
}

impl SortKey {
    fn title(self) -> &'static str {
        match self {
            SortKey::Species => "Species",
            SortKey::Island => "Island",
            SortKey::BillLength => "Bill Length (mm)",
            SortKey::BillDepth => "Bill Depth (mm)",
            SortKey::BodyMass => "Body Mass (g)",
        }
    }
}

const COLUMNS: [SortKey; 5] = [
    SortKey::Species,
    SortKey::Island,
    SortKey::BillLength,
    SortKey::BillDepth,
    SortKey::BodyMass,
];

/// Presentation-only grid state: sort order and search text. Lives outside
/// the session, next to the widgets that own it.
#[derive(Debug, Default)]
pub struct GridState {
    /// Active sort column and whether it is descending.
    pub sort: Option<(SortKey, bool)>,
    /// Case-insensitive substring match on species and island.
    pub search: String,
}

impl GridState {
    fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, false)) if current == key => Some((key, true)),
            Some((current, true)) if current == key => None,
            _ => Some((key, false)),
        };
    }

    fn header_label(&self, key: SortKey) -> String {
        match self.sort {
            Some((current, false)) if current == key => format!("{} ⏶", key.title()),
            Some((current, true)) if current == key => format!("{} ⏷", key.title()),
            _ => key.title().to_string(),
        }
    }
}

/// Rows of the filtered view, reordered for display. Missing numeric values
/// sort last regardless of direction.
fn display_rows(dataset: &PenguinDataset, rows: &[usize], state: &GridState) -> Vec<usize> {
    let needle = state.search.to_lowercase();
    let mut out: Vec<usize> = rows
        .iter()
        .copied()
        .filter(|&i| {
            if needle.is_empty() {
                return true;
            }
            let r = &dataset.records()[i];
            r.species.to_string().to_lowercase().contains(&needle)
                || r.island.to_lowercase().contains(&needle)
        })
        .collect();

    if let Some((key, descending)) = state.sort {
        out.sort_by(|&a, &b| {
            let (ra, rb) = (&dataset.records()[a], &dataset.records()[b]);
            let ord = match key {
                SortKey::Species => ra.species.cmp(&rb.species),
                SortKey::Island => ra.island.cmp(&rb.island),
                SortKey::BillLength => cmp_opt(ra.bill_length_mm, rb.bill_length_mm, descending),
                SortKey::BillDepth => cmp_opt(ra.bill_depth_mm, rb.bill_depth_mm, descending),
                SortKey::BodyMass => cmp_opt(ra.body_mass_g, rb.body_mass_g, descending),
            };
            if descending { ord.reverse() } else { ord }
        });
    }
    out
}

fn cmp_opt(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    // Missing values compare as "largest" ascending and "smallest"
    // descending, so the later `reverse` always leaves them at the bottom.
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => {
            if descending { Ordering::Greater } else { Ordering::Less }
        }
        (None, Some(_)) => {
            if descending { Ordering::Less } else { Ordering::Greater }
        }
        (None, None) => Ordering::Equal,
    }
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "NA".to_string(),
    }
}

/// Render the data grid: search box plus a five-column sortable table.
pub fn data_grid(ui: &mut Ui, state: &mut GridState, dataset: &PenguinDataset, rows: &[usize]) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search:");
        ui.add(egui::TextEdit::singleline(&mut state.search).desired_width(160.0));
        if !state.search.is_empty() && ui.small_button("✕").clicked() {
            state.search.clear();
        }
    });
    ui.add_space(4.0);

    let visible = display_rows(dataset, rows, state);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .columns(Column::remainder(), 3)
        .header(20.0, |mut header| {
            for key in COLUMNS {
                header.col(|ui: &mut Ui| {
                    if ui.button(state.header_label(key)).clicked() {
                        state.toggle_sort(key);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let record: &Record = &dataset.records()[visible[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(record.species.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&record.island);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(fmt_opt(record.bill_length_mm, 1));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(fmt_opt(record.bill_depth_mm, 1));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(fmt_opt(record.body_mass_g, 0));
                });
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    fn dataset() -> PenguinDataset {
        let rec = |species: Species, island: &str, length: Option<f64>| Record {
            species,
            island: island.to_string(),
            bill_length_mm: length,
            bill_depth_mm: Some(18.0),
            body_mass_g: Some(4000.0),
        };
        PenguinDataset::from_records(vec![
            rec(Species::Gentoo, "Biscoe", Some(47.0)),
            rec(Species::Adelie, "Torgersen", Some(39.0)),
            rec(Species::Adelie, "Dream", None),
            rec(Species::Chinstrap, "Dream", Some(49.0)),
        ])
    }

    #[test]
    fn unsorted_grid_keeps_view_order() {
        let ds = dataset();
        let state = GridState::default();
        assert_eq!(display_rows(&ds, &[0, 1, 2, 3], &state), vec![0, 1, 2, 3]);
    }

    #[test]
    fn sorting_by_numeric_column_puts_missing_last() {
        let ds = dataset();
        let mut state = GridState::default();
        state.toggle_sort(SortKey::BillLength);
        assert_eq!(display_rows(&ds, &[0, 1, 2, 3], &state), vec![1, 0, 3, 2]);

        // Second click flips direction; missing still last.
        state.toggle_sort(SortKey::BillLength);
        assert_eq!(display_rows(&ds, &[0, 1, 2, 3], &state), vec![3, 0, 1, 2]);

        // Third click clears the sort.
        state.toggle_sort(SortKey::BillLength);
        assert_eq!(state.sort, None);
    }

    #[test]
    fn search_matches_species_and_island() {
        let ds = dataset();
        let mut state = GridState {
            search: "dream".to_string(),
            ..GridState::default()
        };
        assert_eq!(display_rows(&ds, &[0, 1, 2, 3], &state), vec![2, 3]);

        state.search = "gent".to_string();
        assert_eq!(display_rows(&ds, &[0, 1, 2, 3], &state), vec![0]);
    }

    #[test]
    fn search_only_sees_the_filtered_view() {
        let ds = dataset();
        let state = GridState {
            search: "dream".to_string(),
            ..GridState::default()
        };
        // Row 2 is outside the view, so the search cannot resurrect it.
        assert_eq!(display_rows(&ds, &[0, 3], &state), vec![3]);
    }
}
