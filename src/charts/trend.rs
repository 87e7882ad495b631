//! Trend view
//!
//! Renders the population-over-time line for one state, and resolves which
//! of the two possible input sources (map click, dropdown) drives the view.

use serde::{Deserialize, Serialize};

use crate::data::PopulationTable;

use super::figure::{Figure, Layout, Trace};

/// Which input event fired most recently
///
/// The trend view has exactly two logical input states: driven by the
/// dropdown, or driven by a map click. Clients tag every trend request
/// with the event that triggered it, so precedence is explicit rather
/// than inferred from a dispatch context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    /// The user clicked a state on the map
    MapClick,
    /// The user changed the state dropdown
    Dropdown,
}

/// Resolve the selected state from the two input sources
///
/// The most recently fired input wins: a map click on state X overrides a
/// stale dropdown value until the dropdown itself changes again. Returns
/// `None` when the winning input carries no value.
pub fn resolve_selection<'a>(
    trigger: Trigger,
    click_location: Option<&'a str>,
    dropdown_state: Option<&'a str>,
) -> Option<&'a str> {
    match trigger {
        Trigger::MapClick => click_location,
        Trigger::Dropdown => dropdown_state,
    }
}

/// Build the trend figure for a state
///
/// Pure function of the table and the state code. Selects every record for
/// the state ordered by ascending year and draws a smoothed,
/// marker-annotated curve. A state absent from the table produces a figure
/// with an empty trace.
pub fn render_trend(table: &PopulationTable, state: &str) -> Figure {
    let series = table.state_series(state);

    let mut x = Vec::with_capacity(series.len());
    let mut y = Vec::with_capacity(series.len());
    for record in series {
        x.push(record.year);
        y.push(record.population);
    }

    Figure {
        data: vec![Trace::spline(x, y)],
        layout: Layout::trend(format!("Population Trend for {state}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PopulationRecord;

    fn sample_table() -> PopulationTable {
        PopulationTable::new(vec![
            PopulationRecord::new("CA", 2021, 39_200_000),
            PopulationRecord::new("CA", 2020, 39_500_000),
            PopulationRecord::new("NY", 2020, 19_300_000),
        ])
    }

    fn trend_points(figure: &Figure) -> Vec<(i32, u64)> {
        match &figure.data[0] {
            Trace::Scatter { x, y, .. } => x.iter().copied().zip(y.iter().copied()).collect(),
            other => panic!("expected scatter trace, got {other:?}"),
        }
    }

    #[test]
    fn test_trend_ordered_by_increasing_year() {
        let figure = render_trend(&sample_table(), "CA");
        let points = trend_points(&figure);

        assert_eq!(points, vec![(2020, 39_500_000), (2021, 39_200_000)]);
    }

    #[test]
    fn test_trend_title_embeds_state() {
        let figure = render_trend(&sample_table(), "NY");
        assert_eq!(figure.layout.title.text, "Population Trend for NY");
    }

    #[test]
    fn test_trend_unknown_state_is_empty_not_error() {
        let figure = render_trend(&sample_table(), "ZZ");
        assert!(trend_points(&figure).is_empty());
    }

    #[test]
    fn test_trend_is_idempotent() {
        let table = sample_table();
        assert_eq!(render_trend(&table, "CA"), render_trend(&table, "CA"));
    }

    #[test]
    fn test_map_click_overrides_stale_dropdown() {
        // Dropdown was A, then the user clicked B on the map.
        let resolved = resolve_selection(Trigger::MapClick, Some("B"), Some("A"));
        assert_eq!(resolved, Some("B"));
    }

    #[test]
    fn test_dropdown_change_overrides_stale_click() {
        // Click selected B earlier, then the dropdown changed to C.
        let resolved = resolve_selection(Trigger::Dropdown, Some("B"), Some("C"));
        assert_eq!(resolved, Some("C"));
    }

    #[test]
    fn test_winning_input_without_value_resolves_nothing() {
        assert_eq!(resolve_selection(Trigger::MapClick, None, Some("A")), None);
        assert_eq!(resolve_selection(Trigger::Dropdown, Some("B"), None), None);
    }

    #[test]
    fn test_trigger_serde_round_trip() {
        let json = serde_json::to_string(&Trigger::MapClick).unwrap();
        assert_eq!(json, "\"map-click\"");

        let trigger: Trigger = serde_json::from_str("\"dropdown\"").unwrap();
        assert_eq!(trigger, Trigger::Dropdown);
    }
}
