//! Core data types for the population table
//!
//! This module defines the fundamental types used throughout the service:
//! - `PopulationRecord`: one state's population figure for one year
//! - `PopulationTable`: the full table, loaded once and immutable thereafter
//!
//! Derived views (`year_slice`, `state_series`) are recomputed per request
//! and never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One state's population figure for one year
///
/// `state` is always a 2-letter code, uppercased by the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationRecord {
    /// 2-letter state code, uppercase
    pub state: String,
    /// Calendar year
    pub year: i32,
    /// Resident population count
    pub population: u64,
}

impl PopulationRecord {
    /// Create a new record
    pub fn new(state: impl Into<String>, year: i32, population: u64) -> Self {
        Self {
            state: state.into(),
            year,
            population,
        }
    }
}

/// The full population table
///
/// Built once by the loader, then shared immutably (behind an `Arc`) with
/// every request handler. All views are cheap linear scans; the table holds
/// at most a few thousand rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationTable {
    records: Vec<PopulationRecord>,
}

impl PopulationTable {
    /// Build a table from loaded records
    ///
    /// The loader guarantees `(state, year)` uniqueness before construction;
    /// this constructor does not re-validate.
    pub fn new(records: Vec<PopulationRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in load order
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// All records for a given year, in load order
    ///
    /// A year absent from the table yields an empty slice, not an error.
    pub fn year_slice(&self, year: i32) -> Vec<&PopulationRecord> {
        self.records.iter().filter(|r| r.year == year).collect()
    }

    /// All records for a given state, ordered by ascending year
    ///
    /// A state absent from the table yields an empty series, not an error.
    pub fn state_series(&self, state: &str) -> Vec<&PopulationRecord> {
        let mut series: Vec<&PopulationRecord> =
            self.records.iter().filter(|r| r.state == state).collect();
        series.sort_by_key(|r| r.year);
        series
    }

    /// Distinct years present in the table, ascending
    pub fn distinct_years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.records.iter().map(|r| r.year).collect();
        years.into_iter().collect()
    }

    /// Distinct state codes present in the table, sorted
    pub fn distinct_states(&self) -> Vec<String> {
        let states: BTreeSet<&str> = self.records.iter().map(|r| r.state.as_str()).collect();
        states.into_iter().map(String::from).collect()
    }

    /// Most recent year in the table, if any
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Earliest year in the table, if any
    pub fn earliest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord::new("NY", 2020, 19_300_000),
            PopulationRecord::new("CA", 2021, 39_200_000),
            PopulationRecord::new("CA", 2020, 39_500_000),
        ])
    }

    #[test]
    fn test_year_slice_returns_matching_records() {
        let table = sample_table();
        let slice = table.year_slice(2020);

        assert_eq!(slice.len(), 2);
        assert!(slice.iter().all(|r| r.year == 2020));
    }

    #[test]
    fn test_year_slice_missing_year_is_empty() {
        let table = sample_table();
        assert!(table.year_slice(1776).is_empty());
    }

    #[test]
    fn test_state_series_ordered_by_year() {
        let table = sample_table();
        let series = table.state_series("CA");

        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2020, 2021]);

        let populations: Vec<u64> = series.iter().map(|r| r.population).collect();
        assert_eq!(populations, vec![39_500_000, 39_200_000]);
    }

    #[test]
    fn test_state_series_missing_state_is_empty() {
        let table = sample_table();
        assert!(table.state_series("ZZ").is_empty());
    }

    #[test]
    fn test_distinct_years_sorted() {
        let table = sample_table();
        assert_eq!(table.distinct_years(), vec![2020, 2021]);
    }

    #[test]
    fn test_distinct_states_sorted() {
        let table = sample_table();
        assert_eq!(table.distinct_states(), vec!["CA", "NY"]);
    }

    #[test]
    fn test_year_bounds() {
        let table = sample_table();
        assert_eq!(table.earliest_year(), Some(2020));
        assert_eq!(table.latest_year(), Some(2021));

        let empty = PopulationTable::new(vec![]);
        assert_eq!(empty.latest_year(), None);
    }
}
