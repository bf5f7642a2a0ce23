use serde::Serialize;

use crate::bar::BarChartLayout;
use crate::bar::BarChartSpec;
use crate::bar::BarChartType;

/// The chart-datum field an axis reads its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisField {
    Date,
    Value,
    Key,
    Group,
}

/// The assignment of chart-datum fields to the two chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisMap {
    pub bottom_axes_maps_to: AxisField,
    pub left_axes_maps_to: AxisField,
}

impl BarChartSpec {
    /// Decides which datum field feeds each axis.
    ///
    /// The dimension axis reads `date` when a time field is configured,
    /// `key` when a category field is configured on a non simple chart,
    /// and `group` otherwise. The other axis always reads `value`; a
    /// horizontal layout swaps the two.
    pub fn axes(&self) -> AxisMap {
        let dimension = if self.time_data_source_id.is_some() {
            AxisField::Date
        } else if self.category_data_source_id.is_some()
            && self.chart_type != BarChartType::Simple
        {
            AxisField::Key
        } else {
            AxisField::Group
        };

        match self.layout {
            BarChartLayout::Vertical => AxisMap {
                bottom_axes_maps_to: dimension,
                left_axes_maps_to: AxisField::Value,
            },
            BarChartLayout::Horizontal => AxisMap {
                bottom_axes_maps_to: AxisField::Value,
                left_axes_maps_to: dimension,
            },
        }
    }
}
