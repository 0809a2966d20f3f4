use std::fmt;

// ---------------------------------------------------------------------------
// Species – the categorical column the dashboard filters on
// ---------------------------------------------------------------------------

/// Penguin species. The three Palmer Archipelago species are first-class;
/// anything else found in a source file is carried as [`Species::Other`] so a
/// row is never silently dropped at load time. `Other` values are not offered
/// by the filter UI, so such rows never match the species filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
    Other(String),
}

impl Species {
    /// The species the filter UI offers, in display order.
    pub fn known() -> [Species; 3] {
        [Species::Adelie, Species::Chinstrap, Species::Gentoo]
    }

    /// Map a source-file species name onto the enum.
    pub fn from_name(name: &str) -> Species {
        match name {
            "Adelie" => Species::Adelie,
            "Chinstrap" => Species::Chinstrap,
            "Gentoo" => Species::Gentoo,
            other => Species::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Adelie => write!(f, "Adelie"),
            Species::Chinstrap => write!(f, "Chinstrap"),
            Species::Gentoo => write!(f, "Gentoo"),
            Species::Other(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin observation. Numeric fields are `None` when the source
/// file has a missing value; such rows stay in the dataset and are handled
/// downstream (a missing mass fails the mass filter, missing bill
/// measurements are skipped by the means).
#[derive(Debug, Clone)]
pub struct Record {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full loaded dataset. Built once by the loader, then shared read-only
/// (behind an `Arc`) for the lifetime of the process; row order is the source
/// file's order and is preserved by every downstream view.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    records: Vec<Record>,
}

impl PenguinDataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        PenguinDataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_maps_known_species() {
        assert_eq!(Species::from_name("Gentoo"), Species::Gentoo);
        assert_eq!(Species::from_name("Adelie"), Species::Adelie);
        assert_eq!(Species::from_name("Chinstrap"), Species::Chinstrap);
    }

    #[test]
    fn from_name_keeps_unrecognized_names() {
        let sp = Species::from_name("Emperor");
        assert_eq!(sp, Species::Other("Emperor".to_string()));
        assert_eq!(sp.to_string(), "Emperor");
        assert!(!Species::known().contains(&sp));
    }
}
