use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::bar::BarChartSpec;
use crate::bar::colors::ColorScale;
use crate::bar::data::ChartDatum;
use crate::error::RenderError;

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// The structured tooltip of a hovered datum.
///
/// The fields mirror what the HTML fragment renders: an optional
/// timestamp heading, the group label, the measurement and the swatch
/// color of the group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<String>,
}

impl BarChartSpec {
    /// Builds the tooltip of a hovered datum. The timestamp heading is
    /// present only on charts with a time field.
    pub fn tooltip(&self, datum: &ChartDatum, colors: &ColorScale) -> Tooltip {
        let timestamp = if self.time_data_source_id.is_some() {
            datum.date
        } else {
            None
        };

        let swatch = colors.get(&datum.group).map(str::to_owned);
        if swatch.is_none() {
            log::debug!("no color scale entry for the {} group", datum.group);
        }

        Tooltip {
            timestamp,
            label: datum.group.clone(),
            value: datum.value,
            swatch,
        }
    }
}

impl Tooltip {
    const TEMPLATE_NAME: &str = "tooltip";

    /// Renders the tooltip as an HTML fragment.
    ///
    /// The plain state is a `div.datapoint-tooltip` holding the color
    /// swatch, the label and the value. With a timestamp the fragment is
    /// wrapped in a `ul.multi-tooltip` whose first item carries the
    /// formatted timestamp. All text is HTML escaped; a missing swatch
    /// renders an empty background color.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut template = TinyTemplate::new();
        template.add_template(
            Self::TEMPLATE_NAME,
            include_str!("./template/tooltip.html.tt"),
        )?;

        let html = template.render(Self::TEMPLATE_NAME, &TooltipContext::from(self))?;
        Ok(html)
    }
}

#[derive(Serialize)]
struct TooltipContext<'a> {
    timestamp: Option<String>,
    label: &'a str,
    value: String,
    swatch: Option<&'a str>,
}

impl<'a> From<&'a Tooltip> for TooltipContext<'a> {
    fn from(tooltip: &'a Tooltip) -> TooltipContext<'a> {
        Self {
            timestamp: tooltip
                .timestamp
                .map(|timestamp| timestamp.format(TIMESTAMP_FORMAT).to_string()),
            label: &tooltip.label,
            value: tooltip.value.to_string(),
            swatch: tooltip.swatch.as_deref(),
        }
    }
}
