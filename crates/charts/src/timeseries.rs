//! Sample generation and input inspection for time-series cards.
//!
//! Unlike the bar chart generator, the time-series one merges the series
//! into shared rows: every generated record carries a measurement for
//! every configured series.

use chrono::DateTime;
use chrono::Utc;
use rand::Rng;

use crate::grain::TimeGrain;
use crate::record::DataValue;
use crate::record::Record;
use crate::series::SeriesSpec;
use crate::table::ColumnType;
use crate::table::TableColumn;
use crate::table::TableRow;

const SAMPLE_ROW_COUNT: usize = 10;
const SAMPLE_ROW_ID_PREFIX: &str = "sample-values";
const SAMPLE_PLACEHOLDER: &str = "Sample";
const SAMPLE_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Generates synthetic time-series records over the last
/// `grain.sample_count()` grains ending now.
///
/// The first series creates one record per instant; every further series
/// adds its own random measurement to the existing records, so each
/// record holds the timestamp plus one value per series. Measurements are
/// uniform in `[0, 100)`.
pub fn generate_sample_values(
    series: &[SeriesSpec],
    time_data_source_id: &str,
    grain: TimeGrain,
) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    let count = grain.sample_count();
    let now = Utc::now();

    let mut samples: Vec<(DateTime<Utc>, Record)> = Vec::with_capacity(count);
    for spec in series {
        let mut timestamp = grain.rewind(now, count as u32);
        for _ in 0..count {
            timestamp = grain.advance(timestamp);
            let value = DataValue::Number(rng.gen_range(0.0..100.0));

            match samples.iter().position(|(instant, _)| *instant == timestamp) {
                Some(index) => samples[index].1.insert(spec.data_source_id.clone(), value),
                None => {
                    let mut record = Record::new();
                    record.insert(time_data_source_id.to_owned(), DataValue::Timestamp(timestamp));
                    record.insert(spec.data_source_id.clone(), value);
                    samples.push((timestamp, record));
                }
            }
        }
    }

    samples.into_iter().map(|(_, record)| record).collect()
}

/// Generates placeholder rows for the tabular projection of a card that
/// has no data yet: ten rows in which timestamp columns show the current
/// instant and every other column shows a fixed placeholder.
pub fn generate_table_sample_values(columns: &[TableColumn]) -> Vec<TableRow> {
    let now = Utc::now();

    (0..SAMPLE_ROW_COUNT)
        .map(|index| {
            let values = columns
                .iter()
                .map(|column| {
                    let value = match column.column_type {
                        Some(ColumnType::Timestamp) => {
                            DataValue::Text(now.format(SAMPLE_TIMESTAMP_FORMAT).to_string())
                        }
                        None => DataValue::Text(SAMPLE_PLACEHOLDER.to_owned()),
                    };
                    (column.id.clone(), value)
                })
                .collect();

            TableRow {
                id: format!("{SAMPLE_ROW_ID_PREFIX}-{index}"),
                values,
                is_selectable: false,
            }
        })
        .collect()
}

/// Returns true when the records hold no measurements at all: every field
/// other than the time field is null in every record. Missing fields
/// count as null.
pub fn is_values_empty(records: &[Record], time_data_source_id: &str) -> bool {
    records.iter().all(|record| {
        record
            .fields()
            .all(|(field, value)| field == time_data_source_id || value.is_null())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::table::ColumnFilter;

    fn series(ids: &[&str]) -> Vec<SeriesSpec> {
        ids.iter()
            .map(|id| SeriesSpec::new((*id).to_owned()))
            .collect()
    }

    #[test]
    fn merges_the_series_into_shared_records() {
        let series = series(&["temperature", "pressure"]);

        let samples = generate_sample_values(&series, "timestamp", TimeGrain::Day);

        assert_eq!(samples.len(), 7);
        for sample in &samples {
            assert!(sample.timestamp("timestamp").is_some());
            assert!(sample.number("temperature").is_some());
            assert!(sample.number("pressure").is_some());
        }
    }

    #[test]
    fn emits_one_record_per_grain_instant() {
        let samples =
            generate_sample_values(&series(&["temperature"]), "timestamp", TimeGrain::Week);

        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn generates_ten_placeholder_rows() {
        let columns = [
            TableColumn {
                id: String::from("timestamp"),
                name: String::from("Timestamp"),
                is_sortable: true,
                column_type: Some(ColumnType::Timestamp),
                filter: None,
            },
            TableColumn {
                id: String::from("temperature"),
                name: String::from("Temperature"),
                is_sortable: true,
                column_type: None,
                filter: Some(ColumnFilter {
                    placeholder_text: String::from("Filter"),
                }),
            },
        ];

        let rows = generate_table_sample_values(&columns);

        assert_eq!(rows.len(), 10);
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.id, format!("sample-values-{index}"));
            assert!(!row.is_selectable);
            assert_eq!(
                row.values.get("temperature"),
                Some(&DataValue::from("Sample"))
            );

            let Some(DataValue::Text(timestamp)) = row.values.get("timestamp") else {
                panic!("expected a formatted timestamp cell");
            };
            assert!(NaiveDateTime::parse_from_str(timestamp, "%m/%d/%Y %H:%M").is_ok());
        }
    }

    #[test]
    fn records_without_measurements_count_as_empty() {
        let empty = [
            Record::from_iter([
                (String::from("timestamp"), DataValue::from(1_571_162_400_000_i64)),
                (String::from("temperature"), DataValue::Null),
            ]),
            Record::from_iter([(String::from("timestamp"), DataValue::from(1_571_166_000_000_i64))]),
        ];
        let mut filled = empty.to_vec();
        filled.push(Record::from_iter([
            (String::from("timestamp"), DataValue::from(1_571_169_600_000_i64)),
            (String::from("temperature"), DataValue::from(10.5)),
        ]));

        assert!(is_values_empty(&empty, "timestamp"));
        assert!(is_values_empty(&[], "timestamp"));
        assert!(!is_values_empty(&filled, "timestamp"));
    }
}
