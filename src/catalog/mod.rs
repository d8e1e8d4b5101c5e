//! Built-in option catalog.
//!
//! Each supported chart variant maps to one runtime class and one option
//! schema. Schemas are plain statics, so callers can define their own with the
//! same building blocks from [`crate::core`].

pub mod common;
pub mod corechart;
pub mod diff;
pub mod material;
pub mod packages;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Schema;

/// Runtime namespace under `google.` holding a chart class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLibrary {
    Visualization,
    Charts,
}

impl ChartLibrary {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visualization => "visualization",
            Self::Charts => "charts",
        }
    }
}

impl fmt::Display for ChartLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart variants known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    AreaChart,
    BarChart,
    ColumnChart,
    ComboChart,
    GeoChart,
    Gauge,
    Histogram,
    LineChart,
    PieChart,
    ScatterChart,
    Table,
    Timeline,
    MaterialBar,
    MaterialLine,
    MaterialScatter,
}

impl ChartType {
    pub const ALL: [ChartType; 15] = [
        Self::AreaChart,
        Self::BarChart,
        Self::ColumnChart,
        Self::ComboChart,
        Self::GeoChart,
        Self::Gauge,
        Self::Histogram,
        Self::LineChart,
        Self::PieChart,
        Self::ScatterChart,
        Self::Table,
        Self::Timeline,
        Self::MaterialBar,
        Self::MaterialLine,
        Self::MaterialScatter,
    ];

    #[must_use]
    pub fn library(self) -> ChartLibrary {
        match self {
            Self::MaterialBar | Self::MaterialLine | Self::MaterialScatter => ChartLibrary::Charts,
            _ => ChartLibrary::Visualization,
        }
    }

    /// Class name inside the library namespace.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::AreaChart => "AreaChart",
            Self::BarChart => "BarChart",
            Self::ColumnChart => "ColumnChart",
            Self::ComboChart => "ComboChart",
            Self::GeoChart => "GeoChart",
            Self::Gauge => "Gauge",
            Self::Histogram => "Histogram",
            Self::LineChart => "LineChart",
            Self::PieChart => "PieChart",
            Self::ScatterChart => "ScatterChart",
            Self::Table => "Table",
            Self::Timeline => "Timeline",
            Self::MaterialBar => "Bar",
            Self::MaterialLine => "Line",
            Self::MaterialScatter => "Scatter",
        }
    }

    /// Package the loader must fetch before the class exists.
    #[must_use]
    pub fn package(self) -> &'static str {
        match self {
            Self::GeoChart => "geochart",
            Self::Gauge => "gauge",
            Self::Table => "table",
            Self::Timeline => "timeline",
            Self::MaterialBar => "bar",
            Self::MaterialLine => "line",
            Self::MaterialScatter => "scatter",
            _ => "corechart",
        }
    }

    #[must_use]
    pub fn options_schema(self) -> &'static Schema {
        match self {
            Self::AreaChart => &corechart::AREA_CHART,
            Self::BarChart => &corechart::BAR_CHART,
            Self::ColumnChart => &corechart::COLUMN_CHART,
            Self::ComboChart => &corechart::COMBO_CHART,
            Self::GeoChart => &packages::GEO_CHART,
            Self::Gauge => &packages::GAUGE,
            Self::Histogram => &corechart::HISTOGRAM,
            Self::LineChart => &corechart::LINE_CHART,
            Self::PieChart => &corechart::PIE_CHART,
            Self::ScatterChart => &corechart::SCATTER_CHART,
            Self::Table => &packages::TABLE,
            Self::Timeline => &packages::TIMELINE,
            Self::MaterialBar => &material::MATERIAL_BAR,
            Self::MaterialLine => &material::MATERIAL_LINE,
            Self::MaterialScatter => &material::MATERIAL_SCATTER,
        }
    }

    /// Options schema of the diff variant, for types the runtime can diff.
    #[must_use]
    pub fn diff_options_schema(self) -> Option<&'static Schema> {
        match self {
            Self::BarChart => Some(&diff::BAR_DIFF_CHART),
            Self::ColumnChart => Some(&diff::COLUMN_DIFF_CHART),
            Self::PieChart => Some(&diff::PIE_DIFF_CHART),
            Self::ScatterChart => Some(&diff::SCATTER_DIFF_CHART),
            _ => None,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "google.{}.{}", self.library(), self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_types_use_their_own_packages() {
        for chart_type in ChartType::ALL {
            if chart_type.library() == ChartLibrary::Charts {
                assert_ne!(chart_type.package(), "corechart", "{chart_type}");
            }
        }
        assert_eq!(ChartType::MaterialLine.to_string(), "google.charts.Line");
        assert_eq!(
            ChartType::LineChart.to_string(),
            "google.visualization.LineChart"
        );
    }

    #[test]
    fn only_core_comparison_charts_support_diff() {
        let diffable: Vec<ChartType> = ChartType::ALL
            .into_iter()
            .filter(|chart_type| chart_type.diff_options_schema().is_some())
            .collect();
        assert_eq!(
            diffable,
            vec![
                ChartType::BarChart,
                ChartType::ColumnChart,
                ChartType::PieChart,
                ChartType::ScatterChart
            ]
        );
    }

    #[test]
    fn diff_schemas_extend_their_base_schema() {
        for chart_type in ChartType::ALL {
            if let Some(schema) = chart_type.diff_options_schema() {
                assert!(schema.is_a(chart_type.options_schema()));
                assert!(schema.field("diff").is_some());
            }
        }
    }

    #[test]
    fn schema_names_are_unique_across_types() {
        let mut names: Vec<&str> = ChartType::ALL
            .iter()
            .map(|chart_type| chart_type.options_schema().name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ChartType::ALL.len());
    }
}
