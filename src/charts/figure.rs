//! Figure descriptor types
//!
//! Serde types that serialize to the Plotly figure JSON consumed by the
//! dashboard page (`Plotly.newPlot(div, figure.data, figure.layout)`).
//! Only the two trace kinds the dashboard uses are modeled.

use serde::Serialize;

/// A complete chart descriptor: traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    /// Data traces
    pub data: Vec<Trace>,
    /// Presentation layout
    pub layout: Layout,
}

/// A single data trace
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// US-state choropleth, colored by a continuous value
    Choropleth {
        /// State codes ("USA-states" location mode)
        locations: Vec<String>,
        /// Color values, one per location
        z: Vec<u64>,
        /// Location interpretation, always "USA-states" here
        locationmode: String,
        /// Continuous color scale name
        colorscale: String,
        /// Color bar annotation
        colorbar: ColorBar,
        /// Per-region hover template
        hovertemplate: String,
    },
    /// Connected line with markers
    Scatter {
        /// X values (years)
        x: Vec<i32>,
        /// Y values (populations)
        y: Vec<u64>,
        /// Draw mode
        mode: String,
        /// Line styling
        line: LineStyle,
    },
}

impl Trace {
    /// A US-state choropleth trace in the dashboard's house style
    pub fn us_choropleth(locations: Vec<String>, z: Vec<u64>) -> Self {
        Trace::Choropleth {
            locations,
            z,
            locationmode: "USA-states".to_string(),
            colorscale: "Viridis".to_string(),
            colorbar: ColorBar {
                title: "Population".to_string(),
            },
            hovertemplate: "%{location}<br>Population: %{z:,}<extra></extra>".to_string(),
        }
    }

    /// A smoothed, marker-annotated line trace
    pub fn spline(x: Vec<i32>, y: Vec<u64>) -> Self {
        Trace::Scatter {
            x,
            y,
            mode: "lines+markers".to_string(),
            line: LineStyle {
                shape: "spline".to_string(),
            },
        }
    }
}

/// Color bar annotation for continuous-scale traces
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    /// Color bar title text
    pub title: String,
}

/// Line styling for scatter traces
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineStyle {
    /// Interpolation shape ("spline" for smoothed curves)
    pub shape: String,
}

/// Figure layout
///
/// Carries the dashboard's shared dark theme: transparent backgrounds so
/// the page background shows through, white font, tight margins.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    /// Chart title
    pub title: Title,
    /// Plot area background
    pub plot_bgcolor: String,
    /// Surrounding paper background
    pub paper_bgcolor: String,
    /// Base font settings
    pub font: Font,
    /// Outer margins
    pub margin: Margin,
    /// Map projection settings (map figures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// X axis (trend figures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis (trend figures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// Hover behavior (trend figures use "x unified")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
}

impl Layout {
    /// Shared dark-theme base layout
    fn themed(title: impl Into<String>) -> Self {
        Self {
            title: Title { text: title.into() },
            plot_bgcolor: "rgba(0,0,0,0)".to_string(),
            paper_bgcolor: "rgba(0,0,0,0)".to_string(),
            font: Font {
                color: "white".to_string(),
            },
            margin: Margin {
                l: 0,
                r: 0,
                t: 40,
                b: 0,
            },
            geo: None,
            xaxis: None,
            yaxis: None,
            hovermode: None,
        }
    }

    /// Layout for the US map figure
    pub fn us_map(title: impl Into<String>) -> Self {
        Self {
            geo: Some(Geo {
                scope: "usa".to_string(),
                bgcolor: "rgba(0,0,0,0)".to_string(),
            }),
            ..Self::themed(title)
        }
    }

    /// Layout for the trend figure
    pub fn trend(title: impl Into<String>) -> Self {
        Self {
            xaxis: Some(Axis {
                title: "Year".to_string(),
                tickformat: None,
            }),
            yaxis: Some(Axis {
                title: "Population".to_string(),
                tickformat: Some(",".to_string()),
            }),
            hovermode: Some("x unified".to_string()),
            margin: Margin {
                l: 60,
                r: 20,
                t: 40,
                b: 40,
            },
            ..Self::themed(title)
        }
    }
}

/// Chart title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    /// Title text
    pub text: String,
}

/// Base font settings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    /// Font color
    pub color: String,
}

/// Outer figure margins in pixels
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// Map projection settings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Geo {
    /// Map scope ("usa")
    pub scope: String,
    /// Map background
    pub bgcolor: String,
}

/// Axis settings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    /// Axis title text
    pub title: String,
    /// Tick label format (e.g. "," for thousands separators)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choropleth_serializes_with_type_tag() {
        let trace = Trace::us_choropleth(vec!["CA".to_string()], vec![39_500_000]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["type"], "choropleth");
        assert_eq!(json["locationmode"], "USA-states");
        assert_eq!(json["colorscale"], "Viridis");
        assert_eq!(json["locations"][0], "CA");
    }

    #[test]
    fn test_scatter_serializes_with_type_tag() {
        let trace = Trace::spline(vec![2020, 2021], vec![100, 200]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "lines+markers");
        assert_eq!(json["line"]["shape"], "spline");
    }

    #[test]
    fn test_map_layout_omits_axes() {
        let layout = Layout::us_map("test");
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["geo"]["scope"], "usa");
        assert!(json.get("xaxis").is_none());
        assert!(json.get("hovermode").is_none());
    }

    #[test]
    fn test_trend_layout_has_unified_hover() {
        let layout = Layout::trend("test");
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["hovermode"], "x unified");
        assert_eq!(json["xaxis"]["title"], "Year");
        assert_eq!(json["yaxis"]["tickformat"], ",");
        assert!(json.get("geo").is_none());
    }
}
