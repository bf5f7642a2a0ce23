use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::hash_map::Entry;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::bar::BarChartSpec;
use crate::bar::BarChartType;
use crate::record::Record;
use crate::series::SeriesSpec;

/// One chart-ready value: the plotted group, the measurement and the
/// dimension the measurement sits at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub group: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl BarChartSpec {
    /// Converts raw records into chart-ready data.
    ///
    /// Grouped and stacked charts partition the records by a dimension
    /// field and emit one datum per record and series; simple charts
    /// consult only the first series. Records whose measurement is missing
    /// or not numeric are dropped. The output order is fixed: partitions
    /// in first seen order, records in input order, series in
    /// configuration order.
    pub fn chart_data(&self, records: Option<&[Record]>) -> Vec<ChartDatum> {
        let Some(records) = records else {
            return Vec::new();
        };

        match self.chart_type {
            BarChartType::Grouped | BarChartType::Stacked => self.grouped_data(records),
            BarChartType::Simple => self.simple_data(records),
        }
    }

    fn grouped_data(&self, records: &[Record]) -> Vec<ChartDatum> {
        // Grouped charts always read the category field; the time field
        // takes priority for the other shapes.
        let time_field = self
            .time_data_source_id
            .as_deref()
            .filter(|_| self.chart_type != BarChartType::Grouped);
        let group_field = time_field.or(self.category_data_source_id.as_deref());

        let mut data = Vec::new();
        for partition in partition_records(records, group_field) {
            for record in partition {
                for series in &self.series {
                    let Some(value) = record.number(&series.data_source_id) else {
                        continue;
                    };

                    let (key, date) = match time_field {
                        Some(field) => (record.key_string(field), record.timestamp(field)),
                        None => (
                            self.category_data_source_id
                                .as_deref()
                                .and_then(|field| record.key_string(field)),
                            None,
                        ),
                    };

                    data.push(ChartDatum {
                        group: self.resolve_group(series, record),
                        value,
                        key,
                        date,
                    });
                }
            }
        }

        data
    }

    fn simple_data(&self, records: &[Record]) -> Vec<ChartDatum> {
        let Some(series) = self.series.first() else {
            return Vec::new();
        };

        if let Some(category_field) = self.category_data_source_id.as_deref() {
            let mut data = Vec::new();
            for partition in partition_records(records, Some(category_field)) {
                for record in partition {
                    let Some(value) = record.number(&series.data_source_id) else {
                        continue;
                    };

                    data.push(ChartDatum {
                        group: record
                            .key_string(category_field)
                            .unwrap_or_else(|| series.data_source_id.clone()),
                        value,
                        key: None,
                        date: None,
                    });
                }
            }
            data
        } else if let Some(time_field) = self.time_data_source_id.as_deref() {
            let mut data = Vec::new();
            for partition in partition_records(records, Some(time_field)) {
                for record in partition {
                    let Some(value) = record.number(&series.data_source_id) else {
                        continue;
                    };

                    data.push(ChartDatum {
                        group: series.data_source_id.clone(),
                        value,
                        key: None,
                        date: record.timestamp(time_field),
                    });
                }
            }
            data
        } else {
            records
                .iter()
                .filter_map(|record| {
                    record
                        .number(&series.data_source_id)
                        .map(|value| ChartDatum {
                            group: series.data_source_id.clone(),
                            value,
                            key: None,
                            date: None,
                        })
                })
                .collect()
        }
    }

    /// Resolves the displayed group of a record: the series label when one
    /// is set, then the category value, then the series id.
    fn resolve_group(&self, series: &SeriesSpec, record: &Record) -> String {
        if let Some(label) = &series.label {
            return label.clone();
        }

        self.category_data_source_id
            .as_deref()
            .and_then(|field| record.key_string(field))
            .unwrap_or_else(|| series.data_source_id.clone())
    }
}

/// Splits records into partitions keyed by the given field, preserving the
/// order in which the keys are first seen. Without a field all records
/// land in one partition.
fn partition_records<'a>(
    records: &'a [Record],
    group_field: Option<&str>,
) -> Vec<Vec<&'a Record>> {
    let mut order = Vec::new();
    let mut partitions: HashMap<Option<String>, Vec<&Record>> = HashMap::new();

    for record in records {
        let key = group_field.and_then(|field| record.key_string(field));
        match partitions.entry(key) {
            Entry::Occupied(entry) => entry.into_mut().push(record),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(vec![record]);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| partitions.remove(&key))
        .collect()
}

/// Resolves the unique group names of chart-ready data in first seen
/// order. The names key the color scale and the value columns of the
/// table projection.
pub fn unique_groups(data: &[ChartDatum]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for datum in data {
        if seen.insert(datum.group.as_str()) {
            groups.push(datum.group.clone());
        }
    }

    groups
}
