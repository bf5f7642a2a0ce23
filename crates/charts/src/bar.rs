//! Shaping of raw records into the inputs of a bar chart card: chart-ready
//! data, axis mappings, color scales, tooltips and a tabular projection.

mod axes;
mod colors;
mod data;
mod sample;
mod table;
mod tooltip;

pub use crate::bar::axes::AxisField;
pub use crate::bar::axes::AxisMap;
pub use crate::bar::colors::ColorScale;
pub use crate::bar::data::ChartDatum;
pub use crate::bar::data::unique_groups;
pub use crate::bar::tooltip::Tooltip;

use serde::Deserialize;
use serde::Serialize;

use crate::series::SeriesSpec;

/// The declarative configuration of a bar chart card.
///
/// The dimension fields are optional and their combination with the chart
/// type decides how raw records are grouped: grouped charts always read
/// the category field, while simple and stacked charts prefer the time
/// field when one is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    /// The plotted series, in display order.
    pub series: Vec<SeriesSpec>,
    /// The raw-record field holding the category of a record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_data_source_id: Option<String>,
    /// The raw-record field holding the timestamp of a record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_data_source_id: Option<String>,
    /// The plotted shape of the chart.
    #[serde(rename = "type", default)]
    pub chart_type: BarChartType,
    /// The orientation of the bars.
    #[serde(default)]
    pub layout: BarChartLayout,
}

impl BarChartSpec {
    pub fn new(series: Vec<SeriesSpec>) -> BarChartSpec {
        Self {
            series,
            category_data_source_id: None,
            time_data_source_id: None,
            chart_type: BarChartType::default(),
            layout: BarChartLayout::default(),
        }
    }

    pub fn with_category(mut self, data_source_id: String) -> BarChartSpec {
        self.category_data_source_id = Some(data_source_id);
        self
    }

    pub fn with_time(mut self, data_source_id: String) -> BarChartSpec {
        self.time_data_source_id = Some(data_source_id);
        self
    }

    pub fn with_type(mut self, chart_type: BarChartType) -> BarChartSpec {
        self.chart_type = chart_type;
        self
    }

    pub fn with_layout(mut self, layout: BarChartLayout) -> BarChartSpec {
        self.layout = layout;
        self
    }
}

/// The plotted shape of a bar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarChartType {
    /// One bar per group.
    #[default]
    Simple,
    /// Bars of the same dimension value side by side.
    Grouped,
    /// Bars of the same dimension value stacked on top of each other.
    Stacked,
}

/// The orientation of the bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarChartLayout {
    #[default]
    Vertical,
    Horizontal,
}
