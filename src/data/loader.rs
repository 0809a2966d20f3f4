use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{PenguinDataset, Record, Species};

/// The five columns every source must provide. Extra columns (sex, year,
/// flipper length in the upstream files) are ignored.
const COLUMNS: [&str; 5] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "body_mass_g",
];

/// Palmer penguins table compiled into the binary; the startup source.
const BUNDLED_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the bundled Palmer penguins dataset. Called once at startup; an
/// error here is fatal and aborts the program.
pub fn load_bundled() -> Result<PenguinDataset> {
    read_csv(BUNDLED_CSV.as_bytes()).context("parsing bundled penguins.csv")
}

/// Load a penguin table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the five named columns, `NA`/empty = missing
/// * `.json`    – `[{ "species": "...", "island": "...", ...numbers }, ...]`
/// * `.parquet` – flat scalar columns, Arrow nulls = missing
pub fn load_file(path: &Path) -> Result<PenguinDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            read_csv(file)
        }
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv<R: Read>(source: R) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut idx = [0usize; 5];
    for (slot, name) in idx.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("CSV missing '{name}' column"))?;
    }
    let [species_idx, island_idx, length_idx, depth_idx, mass_idx] = idx;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |i: usize| row.get(i).unwrap_or("");

        records.push(Record {
            species: Species::from_name(field(species_idx)),
            island: field(island_idx).to_string(),
            bill_length_mm: parse_opt_f64(field(length_idx), row_no, "bill_length_mm")?,
            bill_depth_mm: parse_opt_f64(field(depth_idx), row_no, "bill_depth_mm")?,
            body_mass_g: parse_opt_f64(field(mass_idx), row_no, "body_mass_g")?,
        });
    }

    Ok(PenguinDataset::from_records(records))
}

/// Parse a numeric CSV cell; empty, `NA` and `NaN` mean missing.
fn parse_opt_f64(s: &str, row: usize, col: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() || s == "NA" || s == "NaN" {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(Some)
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One row in records-oriented JSON (the default `df.to_json(orient='records')`).
/// Unknown keys are ignored; `null` or an absent key means missing.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    species: String,
    island: String,
    #[serde(default)]
    bill_length_mm: Option<f64>,
    #[serde(default)]
    bill_depth_mm: Option<f64>,
    #[serde(default)]
    body_mass_g: Option<f64>,
}

impl From<JsonRecord> for Record {
    fn from(raw: JsonRecord) -> Record {
        Record {
            species: Species::from_name(&raw.species),
            island: raw.island,
            bill_length_mm: raw.bill_length_mm,
            bill_depth_mm: raw.bill_depth_mm,
            body_mass_g: raw.body_mass_g,
        }
    }
}

fn load_json(path: &Path) -> Result<PenguinDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<JsonRecord> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(PenguinDataset::from_records(
        rows.into_iter().map(Record::from).collect(),
    ))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with flat scalar columns.
///
/// Expected schema: `species` and `island` as Utf8, the three measurements
/// as Float64 (Float32/Int32/Int64 also accepted). Works with files written
/// by both **Pandas** (`df.to_parquet()`) and **Polars**
/// (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<PenguinDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mut idx = [0usize; 5];
        for (slot, name) in idx.iter_mut().zip(COLUMNS) {
            *slot = schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
        }
        let [species_idx, island_idx, length_idx, depth_idx, mass_idx] = idx;

        for row in 0..batch.num_rows() {
            let species = extract_string(batch.column(species_idx), row)
                .with_context(|| format!("Row {row}: reading 'species'"))?;
            let island = extract_string(batch.column(island_idx), row)
                .with_context(|| format!("Row {row}: reading 'island'"))?;

            records.push(Record {
                species: Species::from_name(&species),
                island,
                bill_length_mm: extract_opt_f64(batch.column(length_idx), row)
                    .with_context(|| format!("Row {row}: reading 'bill_length_mm'"))?,
                bill_depth_mm: extract_opt_f64(batch.column(depth_idx), row)
                    .with_context(|| format!("Row {row}: reading 'bill_depth_mm'"))?,
                body_mass_g: extract_opt_f64(batch.column(mass_idx), row)
                    .with_context(|| format!("Row {row}: reading 'body_mass_g'"))?,
            });
        }
    }

    Ok(PenguinDataset::from_records(records))
}

// -- Arrow helpers --

/// Extract a string cell; nulls become the empty string.
fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

/// Extract a numeric cell as `f64`; Arrow nulls become `None`.
fn extract_opt_f64(col: &Arc<dyn Array>, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            arr.value(row)
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            arr.value(row) as f64
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            arr.value(row) as f64
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            arr.value(row) as f64
        }
        other => bail!("expected a numeric column, got {other:?}"),
    };
    // Pandas encodes missing floats as NaN rather than as Arrow nulls.
    Ok(if value.is_nan() { None } else { Some(value) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads() {
        let ds = load_bundled().unwrap();
        assert!(!ds.is_empty());
        assert!(ds.records().iter().all(|r| !r.island.is_empty()));
        assert!(
            ds.records()
                .iter()
                .any(|r| r.species == Species::Chinstrap)
        );
    }

    #[test]
    fn csv_treats_na_and_empty_as_missing() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,body_mass_g,sex
Adelie,Torgersen,39.1,18.7,3750,male
Adelie,Torgersen,NA,,NA,
Gentoo,Biscoe,46.1,13.2,4500,female
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[0].body_mass_g, Some(3750.0));
        assert_eq!(ds.records()[1].bill_length_mm, None);
        assert_eq!(ds.records()[1].bill_depth_mm, None);
        assert_eq!(ds.records()[1].body_mass_g, None);
        assert_eq!(ds.records()[2].species, Species::Gentoo);
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "species,island,bill_length_mm,bill_depth_mm\nAdelie,Dream,39.1,18.7\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("body_mass_g"));
    }

    #[test]
    fn csv_garbage_number_is_an_error() {
        let csv = "species,island,bill_length_mm,bill_depth_mm,body_mass_g\nAdelie,Dream,abc,18.7,3750\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn json_records_roundtrip_through_serde() {
        let json = r#"[
            {"species": "Chinstrap", "island": "Dream",
             "bill_length_mm": 49.5, "bill_depth_mm": 19.0,
             "body_mass_g": 3800, "year": 2008},
            {"species": "Adelie", "island": "Biscoe",
             "bill_length_mm": null, "bill_depth_mm": 17.1,
             "body_mass_g": null}
        ]"#;
        let rows: Vec<JsonRecord> = serde_json::from_str(json).unwrap();
        let records: Vec<Record> = rows.into_iter().map(Record::from).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].species, Species::Chinstrap);
        assert_eq!(records[0].body_mass_g, Some(3800.0));
        assert_eq!(records[1].bill_length_mm, None);
        assert_eq!(records[1].body_mass_g, None);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        assert!(load_file(Path::new("penguins.xlsx")).is_err());
    }
}
