use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A single field value of a raw record.
///
/// Values arrive from the data source as loosely typed JSON. The untagged
/// representation sorts numbers, booleans, RFC 3339 timestamp strings and
/// plain text into the matching variant; anything else is rejected at the
/// deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Null,
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl DataValue {
    /// Interprets the value as a number. Booleans map to zero and one,
    /// timestamps to epoch milliseconds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Number(number) => Some(*number),
            DataValue::Bool(boolean) => Some(*boolean as u64 as f64),
            DataValue::Timestamp(timestamp) => Some(timestamp.timestamp_millis() as f64),
            DataValue::Null | DataValue::Text(_) => None,
        }
    }

    /// Interprets the value as an instant. Numbers are read as epoch
    /// milliseconds.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            DataValue::Timestamp(timestamp) => Some(*timestamp),
            DataValue::Number(number) => Utc.timestamp_millis_opt(*number as i64).single(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => Ok(()),
            DataValue::Bool(boolean) => Display::fmt(boolean, f),
            DataValue::Number(number) => Display::fmt(number, f),
            DataValue::Timestamp(timestamp) => Display::fmt(timestamp, f),
            DataValue::Text(text) => Display::fmt(text, f),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Number(value as f64)
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Bool(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_owned())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(value: DateTime<Utc>) -> Self {
        DataValue::Timestamp(value)
    }
}

/// A raw input record: a mapping from field name to field value.
///
/// Only the fields referenced by the chart configuration are consulted.
/// A missing field and an explicitly null one are equivalent everywhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(HashMap<String, DataValue>);

impl Record {
    pub fn new() -> Record {
        Self(HashMap::new())
    }

    /// Sets the value of a field.
    pub fn insert(&mut self, field: String, value: DataValue) {
        self.0.insert(field, value);
    }

    /// Returns the value of a field. Missing and null fields yield `None`.
    pub fn get(&self, field: &str) -> Option<&DataValue> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// Returns the field value as a number, per [DataValue::as_f64].
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(DataValue::as_f64)
    }

    /// Returns the field value as an instant, per [DataValue::as_timestamp].
    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.get(field).and_then(DataValue::as_timestamp)
    }

    /// Returns the field value as text.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(DataValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Returns the grouping-key form of the field value. Missing and null
    /// fields yield `None`.
    pub fn key_string(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Iterates over all stored fields, explicit nulls included.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl FromIterator<(String, DataValue)> for Record {
    fn from_iter<I>(iter: I) -> Record
    where
        I: IntoIterator<Item = (String, DataValue)>,
    {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_are_equivalent() {
        let record = Record::from_iter([(String::from("temperature"), DataValue::Null)]);

        assert_eq!(record.get("temperature"), None);
        assert_eq!(record.get("pressure"), None);
        assert_eq!(record.number("temperature"), None);
        assert_eq!(record.key_string("pressure"), None);
    }

    #[test]
    fn values_convert_to_numbers() {
        let timestamp = Utc.timestamp_millis_opt(1_571_162_400_000).single().unwrap();

        assert_eq!(DataValue::Number(10.5).as_f64(), Some(10.5));
        assert_eq!(DataValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(DataValue::Bool(false).as_f64(), Some(0.0));
        assert_eq!(
            DataValue::Timestamp(timestamp).as_f64(),
            Some(1_571_162_400_000.0)
        );
        assert_eq!(DataValue::from("n/a").as_f64(), None);
        assert_eq!(DataValue::Null.as_f64(), None);
    }

    #[test]
    fn numbers_convert_to_timestamps() {
        let record =
            Record::from_iter([(String::from("t"), DataValue::from(1_571_162_400_000_i64))]);
        let timestamp = record.timestamp("t").unwrap();

        assert_eq!(timestamp.timestamp_millis(), 1_571_162_400_000);
        assert_eq!(record.timestamp("missing"), None);
    }

    #[test]
    fn key_strings_print_integral_numbers_without_a_fraction() {
        let record = Record::from_iter([
            (String::from("t"), DataValue::from(1_571_162_400_000_i64)),
            (String::from("city"), DataValue::from("Berlin")),
        ]);

        assert_eq!(record.key_string("t"), Some(String::from("1571162400000")));
        assert_eq!(record.key_string("city"), Some(String::from("Berlin")));
        assert_eq!(record.text("city"), Some("Berlin"));
    }

    #[test]
    fn deserializes_untagged_values() -> Result<(), serde_json::Error> {
        let record: Record = serde_json::from_str(
            r#"{
                "city": "Berlin",
                "temperature": 10.5,
                "online": true,
                "measured": "2019-10-15T18:00:00Z",
                "pressure": null
            }"#,
        )?;

        assert_eq!(record.get("city"), Some(&DataValue::from("Berlin")));
        assert_eq!(record.number("temperature"), Some(10.5));
        assert_eq!(record.get("online"), Some(&DataValue::Bool(true)));
        assert_eq!(
            record.timestamp("measured").map(|ts| ts.timestamp_millis()),
            Some(1_571_162_400_000)
        );
        assert_eq!(record.get("pressure"), None);

        Ok(())
    }
}
