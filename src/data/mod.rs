/// Data layer: the embedded tipping table and the pure computations over it.
///
/// Architecture:
/// ```text
///   tips.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, bill domain
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐  ┌──────────┐
///   │  filter   │ ──▶ │  metrics  │  │  trend    │
///   └──────────┘     └──────────┘  └──────────┘
///    visible row       summaries,     scatter
///    indices           quartiles      smoothing
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod trend;
