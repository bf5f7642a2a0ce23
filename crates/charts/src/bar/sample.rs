use std::ops::Range;

use chrono::Utc;
use rand::Rng;

use crate::bar::BarChartSpec;
use crate::grain::TimeGrain;
use crate::record::DataValue;
use crate::record::Record;

const CATEGORY_SAMPLE_COUNT: usize = 4;
const SAMPLE_VALUE_RANGE: Range<f64> = 0.0..100.0;

impl BarChartSpec {
    /// Generates synthetic records for the preview and edit states of a
    /// card, shaped after the configured dimension fields.
    ///
    /// With a time field, every series contributes one pass over the last
    /// `grain.sample_count()` grains ending now; a pass emits one record
    /// per instant, or four category records per instant when a category
    /// field is configured as well. Without a time field the result is
    /// four category records. Measurements are uniform in `[0, 100)`.
    pub fn sample_values(&self, grain: TimeGrain) -> Vec<Record> {
        match self.time_data_source_id.as_deref() {
            Some(time_field) => match self.category_data_source_id.as_deref() {
                Some(category_field) => {
                    self.timed_category_samples(time_field, category_field, grain)
                }
                None => self.timed_samples(time_field, grain),
            },
            None => self.category_samples(),
        }
    }

    fn timed_samples(&self, time_field: &str, grain: TimeGrain) -> Vec<Record> {
        let mut rng = rand::thread_rng();
        let count = grain.sample_count();
        let now = Utc::now();

        let mut samples = Vec::with_capacity(count * self.series.len());
        for series in &self.series {
            let mut timestamp = grain.rewind(now, count as u32);
            for _ in 0..count {
                timestamp = grain.advance(timestamp);

                let mut record = Record::new();
                record.insert(time_field.to_owned(), DataValue::Timestamp(timestamp));
                record.insert(
                    series.data_source_id.clone(),
                    DataValue::Number(rng.gen_range(SAMPLE_VALUE_RANGE)),
                );
                samples.push(record);
            }
        }

        samples
    }

    fn timed_category_samples(
        &self,
        time_field: &str,
        category_field: &str,
        grain: TimeGrain,
    ) -> Vec<Record> {
        let mut rng = rand::thread_rng();
        let count = grain.sample_count();
        let now = Utc::now();

        // One pass of category records per series entry; every record
        // carries a measurement for every series.
        let mut samples = Vec::with_capacity(count * CATEGORY_SAMPLE_COUNT * self.series.len());
        for _ in &self.series {
            let mut timestamp = grain.rewind(now, count as u32);
            for _ in 0..count {
                timestamp = grain.advance(timestamp);

                for sample in 0..CATEGORY_SAMPLE_COUNT {
                    let mut record = Record::new();
                    record.insert(
                        category_field.to_owned(),
                        DataValue::Text(format!("Sample {}", sample + 1)),
                    );
                    record.insert(time_field.to_owned(), DataValue::Timestamp(timestamp));
                    for series in &self.series {
                        record.insert(
                            series.data_source_id.clone(),
                            DataValue::Number(rng.gen_range(SAMPLE_VALUE_RANGE)),
                        );
                    }
                    samples.push(record);
                }
            }
        }

        samples
    }

    fn category_samples(&self) -> Vec<Record> {
        let mut rng = rand::thread_rng();

        let mut samples = Vec::with_capacity(CATEGORY_SAMPLE_COUNT);
        for sample in 0..CATEGORY_SAMPLE_COUNT {
            let mut record = Record::new();
            if let Some(category_field) = &self.category_data_source_id {
                record.insert(
                    category_field.clone(),
                    DataValue::Text(format!("Sample {}", sample + 1)),
                );
            }
            for series in &self.series {
                record.insert(
                    series.data_source_id.clone(),
                    DataValue::Number(rng.gen_range(SAMPLE_VALUE_RANGE)),
                );
            }
            samples.push(record);
        }

        samples
    }
}
