use chrono::DateTime;
use chrono::Duration;
use chrono::Months;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// The calendar granularity of a time-series chart.
///
/// The grain sets the distance between two generated sample points and how
/// many of them one pass produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGrain {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl TimeGrain {
    /// Returns the number of sample points one generation pass produces
    /// for this grain.
    pub fn sample_count(self) -> usize {
        match self {
            TimeGrain::Hour => 24,
            TimeGrain::Day => 7,
            TimeGrain::Week => 4,
            TimeGrain::Month => 12,
            TimeGrain::Year => 5,
        }
    }

    /// Moves the instant forward by one grain. Month and year steps are
    /// calendar aware and clamp to the last day of the target month.
    pub fn advance(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeGrain::Hour => instant + Duration::hours(1),
            TimeGrain::Day => instant + Duration::days(1),
            TimeGrain::Week => instant + Duration::weeks(1),
            TimeGrain::Month => instant + Months::new(1),
            TimeGrain::Year => instant + Months::new(12),
        }
    }

    /// Moves the instant backward by the given number of grains. Counts that
    /// reach past the representable time range clamp to the earliest instant.
    pub fn rewind(self, instant: DateTime<Utc>, count: u32) -> DateTime<Utc> {
        let rewound = match self {
            TimeGrain::Hour => instant.checked_sub_signed(Duration::hours(count as i64)),
            TimeGrain::Day => instant.checked_sub_signed(Duration::days(count as i64)),
            TimeGrain::Week => instant.checked_sub_signed(Duration::weeks(count as i64)),
            TimeGrain::Month => instant.checked_sub_months(Months::new(count)),
            TimeGrain::Year => instant.checked_sub_months(Months::new(count.saturating_mul(12))),
        };

        rewound.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
