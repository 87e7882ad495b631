//! CSV loader
//!
//! Fetches the upstream population CSV once at process start and builds the
//! immutable [`PopulationTable`]. The source has no header row and exactly
//! three columns: `(state, year, population)`.
//!
//! Normalization applied per row:
//! - state codes are uppercased
//! - rows with a year beyond the configured cutoff are dropped (the
//!   upstream file may carry future projections)
//! - population is coerced to an integer; a value that cannot be coerced
//!   fails the whole load
//!
//! One attempt, no retries: a load failure is fatal to startup.

use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;

use crate::config::DataConfig;

use super::error::{DataError, DataResult};
use super::types::{PopulationRecord, PopulationTable};

/// One-shot loader for the population table
#[derive(Debug, Clone)]
pub struct Loader {
    /// URL of the upstream CSV
    source_url: String,
    /// Optional local file override; takes precedence over the URL
    source_file: Option<PathBuf>,
    /// Maximum year accepted into the table
    cutoff_year: i32,
}

impl Loader {
    /// Create a loader from the data configuration
    pub fn from_config(config: &DataConfig) -> Self {
        Self {
            source_url: config.source_url.clone(),
            source_file: config.source_file.clone().map(PathBuf::from),
            cutoff_year: config.cutoff_year,
        }
    }

    /// Create a loader reading from a local file
    pub fn from_file(path: impl Into<PathBuf>, cutoff_year: i32) -> Self {
        Self {
            source_url: String::new(),
            source_file: Some(path.into()),
            cutoff_year,
        }
    }

    /// Load, normalize, and validate the population table
    ///
    /// Fails with [`DataError::Unavailable`] if the source cannot be
    /// fetched or read, and with [`DataError::MalformedRecord`] if any row
    /// fails coercion.
    pub async fn load(&self) -> DataResult<PopulationTable> {
        let table = match &self.source_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading population table from file");
                let file = std::fs::File::open(path)?;
                self.parse(file)?
            }
            None => {
                tracing::info!(url = %self.source_url, "Fetching population table");
                let body = reqwest::get(&self.source_url).await?.error_for_status()?.text().await?;
                self.parse(body.as_bytes())?
            }
        };

        tracing::info!(
            rows = table.len(),
            states = table.distinct_states().len(),
            cutoff_year = self.cutoff_year,
            "Population table loaded"
        );

        Ok(table)
    }

    /// Parse and normalize CSV content into a table
    ///
    /// Exposed separately from [`Loader::load`] so tests can drive it from
    /// in-memory strings.
    pub fn parse(&self, reader: impl Read) -> DataResult<PopulationTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        let mut seen: HashSet<(String, i32)> = HashSet::new();

        for (idx, result) in csv_reader.records().enumerate() {
            let line = idx + 1;

            let record = result.map_err(|e| DataError::Unavailable(e.to_string()))?;

            if record.len() != 3 {
                return Err(DataError::MalformedRecord {
                    line,
                    message: format!("expected 3 columns, got {}", record.len()),
                });
            }

            let state = record[0].to_uppercase();

            let year: i32 = record[1].parse().map_err(|_| DataError::MalformedRecord {
                line,
                message: format!("cannot parse year: {:?}", &record[1]),
            })?;

            // Future projections are excluded; the cutoff is configuration,
            // not a property of the data.
            if year > self.cutoff_year {
                continue;
            }

            let population: u64 = record[2].parse().map_err(|_| DataError::MalformedRecord {
                line,
                message: format!("cannot parse population: {:?}", &record[2]),
            })?;

            if !seen.insert((state.clone(), year)) {
                return Err(DataError::MalformedRecord {
                    line,
                    message: format!("duplicate record for ({state}, {year})"),
                });
            }

            records.push(PopulationRecord::new(state, year, population));
        }

        if records.is_empty() {
            return Err(DataError::Unavailable(
                "source contained no usable rows".to_string(),
            ));
        }

        Ok(PopulationTable::new(records))
    }
}
