use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::DateTime;
use chrono::Utc;

use crate::bar::BarChartSpec;
use crate::bar::BarChartType;
use crate::bar::data::ChartDatum;
use crate::record::DataValue;
use crate::record::Record;
use crate::table::ColumnFilter;
use crate::table::ColumnType;
use crate::table::TableColumn;
use crate::table::TableRow;

const ROW_ID_PREFIX: &str = "dataindex";
const ROW_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

impl BarChartSpec {
    /// Builds the column set of the tabular projection: a leading
    /// dimension column followed by one sortable column per resolved
    /// group name.
    ///
    /// The leading column is the time field when one is configured, the
    /// category field otherwise; simple charts carry no category column.
    /// A filter with the given placeholder is attached to the value
    /// columns only.
    pub fn table_columns(
        &self,
        dataset_names: &[String],
        filter_placeholder: Option<&str>,
    ) -> Vec<TableColumn> {
        let mut columns = Vec::with_capacity(dataset_names.len() + 1);

        if let Some(time_field) = &self.time_data_source_id {
            columns.push(TableColumn {
                id: time_field.clone(),
                name: capitalize(time_field),
                is_sortable: true,
                column_type: Some(ColumnType::Timestamp),
                filter: None,
            });
        } else if let Some(category_field) = &self.category_data_source_id {
            if self.chart_type != BarChartType::Simple {
                columns.push(TableColumn {
                    id: category_field.clone(),
                    name: capitalize(category_field),
                    is_sortable: true,
                    column_type: None,
                    filter: None,
                });
            }
        }

        for name in dataset_names {
            columns.push(TableColumn {
                id: name.clone(),
                name: capitalize(name),
                is_sortable: true,
                column_type: None,
                filter: filter_placeholder.map(|text| ColumnFilter {
                    placeholder_text: text.to_owned(),
                }),
            });
        }

        columns
    }

    /// Builds the rows of the tabular projection from the raw records and
    /// the chart-ready data, one row per unique timestamp or category key.
    /// Simple charts without a time field collapse into a single row.
    pub fn table_rows(&self, records: &[Record], data: &[ChartDatum]) -> Vec<TableRow> {
        if let Some(time_field) = self.time_data_source_id.as_deref() {
            time_rows(time_field, records, data)
        } else if self.chart_type == BarChartType::Simple {
            simple_row(data)
        } else {
            category_rows(self.category_data_source_id.as_deref(), records, data)
        }
    }
}

fn time_rows(time_field: &str, records: &[Record], data: &[ChartDatum]) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for (index, timestamp) in unique_timestamps(records, time_field).into_iter().enumerate() {
        let mut values = BTreeMap::new();
        for datum in data {
            let matches = datum
                .date
                .is_some_and(|date| date.timestamp_millis() == timestamp.timestamp_millis());
            if matches {
                values.insert(datum.group.clone(), DataValue::Number(datum.value));
            }
        }
        values.insert(
            time_field.to_owned(),
            DataValue::Text(timestamp.format(ROW_TIMESTAMP_FORMAT).to_string()),
        );

        rows.push(TableRow {
            id: format!("{ROW_ID_PREFIX}-{index}"),
            values,
            is_selectable: false,
        });
    }

    rows
}

// The single row carries the literal id "dataindex-1", not a 0-based index.
fn simple_row(data: &[ChartDatum]) -> Vec<TableRow> {
    let mut values = BTreeMap::new();
    for datum in data {
        values.insert(datum.group.clone(), DataValue::Number(datum.value));
    }

    vec![TableRow {
        id: format!("{ROW_ID_PREFIX}-1"),
        values,
        is_selectable: false,
    }]
}

fn category_rows(
    category_field: Option<&str>,
    records: &[Record],
    data: &[ChartDatum],
) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for (index, (key, raw)) in unique_keys(records, category_field).into_iter().enumerate() {
        let mut values = BTreeMap::new();
        for datum in data {
            if datum.key == key {
                values.insert(datum.group.clone(), DataValue::Number(datum.value));
            }
        }
        if let (Some(field), Some(raw)) = (category_field, raw) {
            values.insert(field.to_owned(), raw.clone());
        }

        rows.push(TableRow {
            id: format!("{ROW_ID_PREFIX}-{index}"),
            values,
            is_selectable: false,
        });
    }

    rows
}

/// Resolves the unique timestamps of the raw records in first seen order,
/// compared at millisecond precision.
fn unique_timestamps(records: &[Record], time_field: &str) -> Vec<DateTime<Utc>> {
    let mut seen = HashSet::new();
    let mut timestamps = Vec::new();

    for record in records {
        if let Some(timestamp) = record.timestamp(time_field) {
            if seen.insert(timestamp.timestamp_millis()) {
                timestamps.push(timestamp);
            }
        }
    }

    timestamps
}

/// Resolves the unique category keys of the raw records in first seen
/// order, paired with the raw value backing each key. Records without a
/// category value share the `None` key.
fn unique_keys<'a>(
    records: &'a [Record],
    category_field: Option<&str>,
) -> Vec<(Option<String>, Option<&'a DataValue>)> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();

    for record in records {
        let raw = category_field.and_then(|field| record.get(field));
        let key = raw.map(ToString::to_string);
        if seen.insert(key.clone()) {
            keys.push((key, raw));
        }
    }

    keys
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
