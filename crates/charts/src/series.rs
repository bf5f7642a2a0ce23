use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// The declaration of one plotted series: the raw-record field it measures,
/// how it is labeled and how it is colored.
///
/// Series order is significant. It drives the fallback color assignment and
/// the order of the value columns in the table projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    /// The raw-record field holding the measurement of this series.
    pub data_source_id: String,
    /// The displayed name of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The color configuration of the series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
}

impl SeriesSpec {
    pub fn new(data_source_id: String) -> SeriesSpec {
        Self {
            data_source_id,
            label: None,
            color: None,
        }
    }

    pub fn with_label(mut self, label: String) -> SeriesSpec {
        self.label = Some(label);
        self
    }

    pub fn with_color(mut self, color: ColorSpec) -> SeriesSpec {
        self.color = Some(color);
        self
    }
}

/// The accepted shapes of a series color configuration.
///
/// A sequence is index-aligned to the resolved group names, a single color
/// applies to the series label, and a group map replaces the whole color
/// scale with a ready-made assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Sequence(Vec<String>),
    Single(String),
    ByGroup(BTreeMap<String, String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_color_shapes() -> Result<(), serde_json::Error> {
        let single: SeriesSpec = serde_json::from_str(
            r##"{ "dataSourceId": "temperature", "label": "Temperature", "color": "#ff0000" }"##,
        )?;
        let sequence: SeriesSpec = serde_json::from_str(
            r##"{ "dataSourceId": "temperature", "color": ["#ff0000", "#00ff00"] }"##,
        )?;
        let by_group: SeriesSpec = serde_json::from_str(
            r##"{ "dataSourceId": "temperature", "color": { "Berlin": "#ff0000" } }"##,
        )?;

        assert_eq!(single.color, Some(ColorSpec::Single(String::from("#ff0000"))));
        assert_eq!(
            sequence.color,
            Some(ColorSpec::Sequence(vec![
                String::from("#ff0000"),
                String::from("#00ff00")
            ]))
        );
        assert_eq!(
            by_group.color,
            Some(ColorSpec::ByGroup(BTreeMap::from([(
                String::from("Berlin"),
                String::from("#ff0000")
            )])))
        );

        Ok(())
    }

    #[test]
    fn omits_unset_fields_from_the_serialized_form() -> Result<(), serde_json::Error> {
        let series = SeriesSpec::new(String::from("temperature"));
        let json = serde_json::to_string(&series)?;

        assert_eq!(json, r#"{"dataSourceId":"temperature"}"#);

        Ok(())
    }
}
