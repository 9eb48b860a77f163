//! Sensitivity table subsystem
//!
//! The table is the engine's only data source: item rows keyed by name,
//! treatment columns in display order, and integer scores where lower is
//! better. It is loaded once per snapshot and never mutated afterwards.

mod errors;
mod loader;
mod types;

pub use errors::{TableError, TableErrorCode, TableResult};
pub use loader::{parse_table, TableLoader};
pub use types::{
    parse_bgn_flag, parse_score, Category, Item, SensitivityTable, TreatmentTable,
};
