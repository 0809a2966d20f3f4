//! Generate synthetic penguin tables for exercising File → Open.
//!
//! Writes `penguins_sample.parquet` (flat scalar columns, with nulls for
//! missing measurements) and `penguins_sample.json` (records orientation).

use std::sync::Arc;

use arrow::array::{Float64Builder, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Serialize)]
struct SampleRow {
    species: String,
    island: String,
    bill_length_mm: Option<f64>,
    bill_depth_mm: Option<f64>,
    body_mass_g: Option<f64>,
}

/// (species, islands, bill length μ/σ, bill depth μ/σ, body mass μ/σ, rows)
const PROFILES: [(&str, &[&str], (f64, f64), (f64, f64), (f64, f64), usize); 3] = [
    (
        "Adelie",
        &["Torgersen", "Biscoe", "Dream"],
        (38.8, 2.7),
        (18.3, 1.2),
        (3700.0, 460.0),
        60,
    ),
    (
        "Chinstrap",
        &["Dream"],
        (48.8, 3.3),
        (18.4, 1.1),
        (3730.0, 380.0),
        28,
    ),
    (
        "Gentoo",
        &["Biscoe"],
        (47.5, 3.1),
        (15.0, 1.0),
        (5080.0, 500.0),
        48,
    ),
];

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut rows: Vec<SampleRow> = Vec::new();

    for (species, islands, bill_len, bill_depth, mass, n) in PROFILES {
        for _ in 0..n {
            let island = islands[(rng.next_u64() as usize) % islands.len()];
            // Roughly one row in forty has a missing measurement set, like
            // the real survey data.
            let missing = rng.next_f64() < 0.025;
            rows.push(SampleRow {
                species: species.to_string(),
                island: island.to_string(),
                bill_length_mm: (!missing)
                    .then(|| (rng.gauss(bill_len.0, bill_len.1) * 10.0).round() / 10.0),
                bill_depth_mm: (!missing)
                    .then(|| (rng.gauss(bill_depth.0, bill_depth.1) * 10.0).round() / 10.0),
                body_mass_g: (!missing).then(|| (rng.gauss(mass.0, mass.1) / 25.0).round() * 25.0),
            });
        }
    }

    write_parquet(&rows, "penguins_sample.parquet");
    write_json(&rows, "penguins_sample.json");
    println!("Wrote {} penguins to penguins_sample.{{parquet,json}}", rows.len());
}

fn write_parquet(rows: &[SampleRow], output_path: &str) {
    let species_array = StringArray::from(
        rows.iter().map(|r| r.species.as_str()).collect::<Vec<_>>(),
    );
    let island_array = StringArray::from(
        rows.iter().map(|r| r.island.as_str()).collect::<Vec<_>>(),
    );

    let float_array = |column: fn(&SampleRow) -> Option<f64>| {
        let mut builder = Float64Builder::with_capacity(rows.len());
        for row in rows {
            builder.append_option(column(row));
        }
        builder.finish()
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("species", DataType::Utf8, false),
        Field::new("island", DataType::Utf8, false),
        Field::new("bill_length_mm", DataType::Float64, true),
        Field::new("bill_depth_mm", DataType::Float64, true),
        Field::new("body_mass_g", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(species_array),
            Arc::new(island_array),
            Arc::new(float_array(|r| r.bill_length_mm)),
            Arc::new(float_array(|r| r.bill_depth_mm)),
            Arc::new(float_array(|r| r.body_mass_g)),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn write_json(rows: &[SampleRow], output_path: &str) {
    let text = serde_json::to_string_pretty(rows).expect("Failed to serialize rows");
    std::fs::write(output_path, text).expect("Failed to write JSON file");
}
