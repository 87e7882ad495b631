//! Population table and loader
//!
//! Holds the core data model: a flat, immutable table of
//! `(state, year, population)` records loaded once at process start, plus
//! the loader that fetches and normalizes the upstream CSV.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DataError, DataResult};
pub use loader::Loader;
pub use types::{PopulationRecord, PopulationTable};
