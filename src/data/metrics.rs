use super::model::{PenguinDataset, Record};

// ---------------------------------------------------------------------------
// Derived metrics over the filtered view
// ---------------------------------------------------------------------------

/// Summary statistics for the value boxes. Recomputed from the filtered view
/// on every frame; the only caching in the pipeline is the view memoization
/// in [`crate::state::Session`].
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub count: usize,
    /// `None` when no row in the view has a bill length.
    pub mean_bill_length_mm: Option<f64>,
    /// `None` when no row in the view has a bill depth.
    pub mean_bill_depth_mm: Option<f64>,
}

/// Compute all metrics for the given view (`rows` are indices into
/// `dataset`, as produced by the filter).
pub fn compute(dataset: &PenguinDataset, rows: &[usize]) -> Metrics {
    Metrics {
        count: rows.len(),
        mean_bill_length_mm: mean_of(dataset, rows, |r| r.bill_length_mm),
        mean_bill_depth_mm: mean_of(dataset, rows, |r| r.bill_depth_mm),
    }
}

/// Arithmetic mean of one numeric column over the view, skipping missing
/// cells. An empty view (or one with only missing cells) yields `None`
/// rather than dividing by zero.
fn mean_of(
    dataset: &PenguinDataset,
    rows: &[usize],
    column: impl Fn(&Record) -> Option<f64>,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for &i in rows {
        if let Some(v) = column(&dataset.records()[i]) {
            sum += v;
            n += 1;
        }
    }
    (n > 0).then(|| sum / n as f64)
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Placeholder shown when a mean is undefined (empty view).
pub const UNDEFINED: &str = "n/a";

/// Format a row count with thousands separators: `1234` → `"1,234"`.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a millimetre mean to one decimal, or the placeholder when
/// undefined.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => UNDEFINED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    fn rec(length: Option<f64>, depth: Option<f64>) -> Record {
        Record {
            species: Species::Adelie,
            island: "Dream".to_string(),
            bill_length_mm: length,
            bill_depth_mm: depth,
            body_mass_g: Some(3700.0),
        }
    }

    #[test]
    fn means_skip_missing_cells() {
        let ds = PenguinDataset::from_records(vec![
            rec(Some(40.0), Some(18.0)),
            rec(None, Some(20.0)),
            rec(Some(44.0), None),
        ]);
        let m = compute(&ds, &[0, 1, 2]);
        assert_eq!(m.count, 3);
        assert_eq!(m.mean_bill_length_mm, Some(42.0));
        assert_eq!(m.mean_bill_depth_mm, Some(19.0));
    }

    #[test]
    fn empty_view_yields_undefined_means() {
        let ds = PenguinDataset::from_records(vec![rec(Some(40.0), Some(18.0))]);
        let m = compute(&ds, &[]);
        assert_eq!(m.count, 0);
        assert_eq!(m.mean_bill_length_mm, None);
        assert_eq!(m.mean_bill_depth_mm, None);
        assert_eq!(format_count(m.count), "0");
        assert_eq!(format_mm(m.mean_bill_length_mm), UNDEFINED);
    }

    #[test]
    fn all_missing_cells_yield_undefined_mean() {
        let ds = PenguinDataset::from_records(vec![rec(None, None), rec(None, None)]);
        let m = compute(&ds, &[0, 1]);
        assert_eq!(m.count, 2);
        assert_eq!(m.mean_bill_length_mm, None);
    }

    #[test]
    fn count_formatting_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(146), "146");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn mean_formatting_uses_one_decimal() {
        assert_eq!(format_mm(Some(43.26)), "43.3 mm");
        assert_eq!(format_mm(Some(17.0)), "17.0 mm");
    }
}
