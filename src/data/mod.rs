/// Data layer: core types, loading, filtering, and derived metrics.
///
/// Architecture:
/// ```text
///  bundled csv / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse source → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ PenguinDataset │  Vec<Record>, immutable, shared via Arc
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species + body-mass predicates → row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metrics  │  count, bill-length / bill-depth means
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
