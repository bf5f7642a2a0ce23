use std::collections::BTreeMap;

use serde::Serialize;

use crate::bar::BarChartSpec;
use crate::palette::ChartPalette;
use crate::palette::ColorFamily;
use crate::series::ColorSpec;

/// The per-group color assignment of a chart, keyed by the `group` field
/// of the chart-ready data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    identifier: &'static str,
    scale: BTreeMap<String, String>,
}

impl ColorScale {
    fn new() -> ColorScale {
        Self {
            identifier: "group",
            scale: BTreeMap::new(),
        }
    }

    /// Returns the color assigned to the given group.
    pub fn get(&self, group: &str) -> Option<&str> {
        self.scale.get(group).map(String::as_str)
    }
}

impl BarChartSpec {
    /// Builds the color scale for the resolved group names.
    ///
    /// A color sequence on the first series is index-aligned to the group
    /// names. Otherwise every series contributes its color configuration
    /// in order: a single color is assigned to the series label and a
    /// group map replaces the scale as a whole, last one wins. Groups that
    /// are still uncolored receive a palette color. In preview mode the
    /// disabled ramp overrides every assignment.
    pub fn colors(
        &self,
        palette: &ChartPalette,
        group_names: &[String],
        preview: bool,
    ) -> ColorScale {
        let mut colors = ColorScale::new();

        if let Some(ColorSpec::Sequence(sequence)) =
            self.series.first().and_then(|series| series.color.as_ref())
        {
            for (name, color) in group_names.iter().zip(sequence) {
                colors.scale.insert(name.clone(), color.clone());
            }
        } else {
            for series in &self.series {
                match &series.color {
                    Some(ColorSpec::Single(color)) => match &series.label {
                        Some(label) => {
                            colors.scale.insert(label.clone(), color.clone());
                        }
                        None => log::debug!(
                            "dropping the color of the {} series: a single color needs a series label",
                            series.data_source_id
                        ),
                    },
                    Some(ColorSpec::ByGroup(scale)) => {
                        colors.scale = scale.clone();
                    }
                    Some(ColorSpec::Sequence(_)) => log::debug!(
                        "dropping the color sequence of the {} series: only the first series may carry one",
                        series.data_source_id
                    ),
                    None => {}
                }
            }
        }

        // Only the first group advances the intensity walk, so within one
        // call every fallback after it lands on the same intensity.
        let mut intensity = ChartPalette::START_INTENSITY;
        for (index, name) in group_names.iter().enumerate() {
            if preview {
                colors
                    .scale
                    .insert(name.clone(), palette.disabled_color(index).to_owned());
            } else if !colors.scale.contains_key(name) {
                colors.scale.insert(
                    name.clone(),
                    palette.fallback_color(index, intensity).to_owned(),
                );

                if index == 0 {
                    intensity = if intensity == ChartPalette::MAX_INTENSITY {
                        ChartPalette::WRAP_INTENSITY
                    } else {
                        intensity + ColorFamily::INTENSITY_STEP
                    };
                }
            }
        }

        colors
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::series::SeriesSpec;

    fn groups(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn every_group_receives_a_color() {
        let spec = BarChartSpec::new(vec![
            SeriesSpec::new(String::from("temperature")).with_label(String::from("Temperature")),
            SeriesSpec::new(String::from("humidity")),
        ]);
        let names = groups(&["Temperature", "Humidity", "Pressure"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        for name in &names {
            assert!(colors.get(name).is_some());
        }
    }

    #[test]
    fn a_sequence_on_the_first_series_aligns_to_the_group_order() {
        let spec = BarChartSpec::new(vec![SeriesSpec::new(String::from("temperature"))
            .with_color(ColorSpec::Sequence(vec![
                String::from("#ff0000"),
                String::from("#00ff00"),
            ]))]);
        let names = groups(&["Amsterdam", "Berlin", "Copenhagen"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        assert_eq!(colors.get("Amsterdam"), Some("#ff0000"));
        assert_eq!(colors.get("Berlin"), Some("#00ff00"));
        assert_eq!(colors.get("Copenhagen"), Some("#24a148"));
    }

    #[test]
    fn fallback_colors_advance_the_intensity_after_the_first_group() {
        let spec = BarChartSpec::new(vec![SeriesSpec::new(String::from("temperature"))]);
        let names = groups(&["Amsterdam", "Berlin", "Copenhagen"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        assert_eq!(colors.get("Amsterdam"), Some("#4589ff"));
        assert_eq!(colors.get("Berlin"), Some("#0072c3"));
        assert_eq!(colors.get("Copenhagen"), Some("#198038"));
    }

    #[test]
    fn a_single_color_applies_to_the_series_label() {
        let spec = BarChartSpec::new(vec![
            SeriesSpec::new(String::from("temperature"))
                .with_label(String::from("Temperature"))
                .with_color(ColorSpec::Single(String::from("#123456"))),
            SeriesSpec::new(String::from("humidity")).with_label(String::from("Humidity")),
        ]);
        let names = groups(&["Temperature", "Humidity"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        // The first group is user colored, so the walk never advances and
        // the fallback stays at the starting intensity.
        assert_eq!(colors.get("Temperature"), Some("#123456"));
        assert_eq!(colors.get("Humidity"), Some("#1192e8"));
    }

    #[test]
    fn a_group_map_replaces_the_whole_scale() {
        let spec = BarChartSpec::new(vec![
            SeriesSpec::new(String::from("temperature"))
                .with_label(String::from("Temperature"))
                .with_color(ColorSpec::Single(String::from("#111111"))),
            SeriesSpec::new(String::from("humidity")).with_color(ColorSpec::ByGroup(
                BTreeMap::from([(String::from("Temperature"), String::from("#222222"))]),
            )),
        ]);
        let names = groups(&["Temperature", "Humidity"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        assert_eq!(colors.get("Temperature"), Some("#222222"));
        assert_eq!(colors.get("Humidity"), Some("#1192e8"));
    }

    #[test]
    fn the_preview_overrides_every_configured_color() {
        let spec = BarChartSpec::new(vec![SeriesSpec::new(String::from("temperature"))
            .with_color(ColorSpec::Sequence(vec![String::from("#ff0000")]))]);
        let names = groups(&["a", "b", "c", "d", "e"]);

        let colors = spec.colors(&ChartPalette::default(), &names, true);

        assert_eq!(colors.get("a"), Some("#8d8d8d"));
        assert_eq!(colors.get("b"), Some("#a8a8a8"));
        assert_eq!(colors.get("c"), Some("#c6c6c6"));
        assert_eq!(colors.get("d"), Some("#e0e0e0"));
        assert_eq!(colors.get("e"), Some("#8d8d8d"));
    }

    #[test]
    fn charts_without_series_still_color_every_group() {
        let spec = BarChartSpec::new(Vec::new());
        let names = groups(&["Amsterdam"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        assert_eq!(colors.get("Amsterdam"), Some("#4589ff"));
    }

    #[test]
    fn serializes_with_the_group_identifier() -> Result<(), serde_json::Error> {
        let spec = BarChartSpec::new(vec![SeriesSpec::new(String::from("temperature"))]);
        let names = groups(&["Amsterdam"]);

        let colors = spec.colors(&ChartPalette::default(), &names, false);

        assert_eq!(
            serde_json::to_value(&colors)?,
            json!({ "identifier": "group", "scale": { "Amsterdam": "#4589ff" } })
        );

        Ok(())
    }
}
