//! Map view
//!
//! Renders the choropleth of state populations for one selected year.

use crate::data::PopulationTable;

use super::figure::{Figure, Layout, Trace};

/// Build the choropleth figure for a year
///
/// Pure function of the table and the year. Selects every record for the
/// year and colors each state by its population on a continuous scale. A
/// year absent from the table produces a figure with an empty trace.
pub fn render_map(table: &PopulationTable, year: i32) -> Figure {
    let slice = table.year_slice(year);

    let mut locations = Vec::with_capacity(slice.len());
    let mut z = Vec::with_capacity(slice.len());
    for record in slice {
        locations.push(record.state.clone());
        z.push(record.population);
    }

    Figure {
        data: vec![Trace::us_choropleth(locations, z)],
        layout: Layout::us_map(format!("Population Distribution ({year})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PopulationRecord;
    use std::collections::HashMap;

    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord::new("CA", 2020, 39_500_000),
            PopulationRecord::new("CA", 2021, 39_200_000),
            PopulationRecord::new("NY", 2020, 19_300_000),
        ])
    }

    fn map_pairs(figure: &Figure) -> HashMap<String, u64> {
        match &figure.data[0] {
            Trace::Choropleth { locations, z, .. } => {
                locations.iter().cloned().zip(z.iter().copied()).collect()
            }
            other => panic!("expected choropleth trace, got {other:?}"),
        }
    }

    #[test]
    fn test_map_returns_exact_year_slice() {
        let figure = render_map(&sample_table(), 2020);
        let pairs = map_pairs(&figure);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["CA"], 39_500_000);
        assert_eq!(pairs["NY"], 19_300_000);
    }

    #[test]
    fn test_map_title_embeds_year() {
        let figure = render_map(&sample_table(), 2021);
        assert_eq!(figure.layout.title.text, "Population Distribution (2021)");
    }

    #[test]
    fn test_map_missing_year_is_empty_not_error() {
        let figure = render_map(&sample_table(), 1776);
        assert!(map_pairs(&figure).is_empty());
    }

    #[test]
    fn test_map_is_idempotent() {
        let table = sample_table();
        assert_eq!(render_map(&table, 2020), render_map(&table, 2020));
    }
}
