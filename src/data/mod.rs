//! Data layer: records, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate → PokemonTable
//!   └──────────┘
//!        │  (CachedDataset keeps it behind an Arc)
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterSelection → new filtered PokemonTable
//!   └──────────┘
//!        │
//!        ├──► stats      summary metrics, describe()
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ aggregate │  Restricted flag → long-form types → counts
//!   └──────────┘
//! ```
//! `dashboard::DashboardView` runs the whole chain for one selection.

pub mod aggregate;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod source;
pub mod stats;
