use chrono::{Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::dataset::MeasurementRecord;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateRange {
    /// Whether `date` falls in this range relative to `now`. Week and month
    /// compare the start of `date` against a cutoff that keeps `now`'s time of
    /// day, so the cutoff day itself only counts at exactly midnight.
    pub fn contains(&self, date: NaiveDate, now: NaiveDateTime) -> bool {
        let start_of_day = date.and_time(NaiveTime::MIN);
        match self {
            DateRange::All => true,
            DateRange::Today => date == now.date(),
            DateRange::Week => start_of_day >= now - Duration::days(7),
            DateRange::Month => match now.checked_sub_months(Months::new(1)) {
                Some(month_ago) => start_of_day >= month_ago,
                None => true,
            },
        }
    }
}

/// Filter selections of the raw data view. `None` selectors mean "all".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordFilter {
    pub search: String,
    pub location: Option<String>,
    pub session_id: Option<String>,
    pub date_range: DateRange,
}

impl RecordFilter {
    pub fn matches(&self, record: &MeasurementRecord, now: NaiveDateTime) -> bool {
        self.matches_search(record)
            && self.matches_location(record)
            && self.matches_session(record)
            && self.date_range.contains(record.date, now)
    }

    /// Substring search over location, coordinates, session name and date.
    /// Names are compared case-insensitively; coordinates and date verbatim.
    pub fn matches_search(&self, record: &MeasurementRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();

        record.location.to_lowercase().contains(&needle)
            || record.coordinates_label().contains(&self.search)
            || record.session_name.to_lowercase().contains(&needle)
            || record.date.format("%Y-%m-%d").to_string().contains(&self.search)
    }

    pub fn matches_location(&self, record: &MeasurementRecord) -> bool {
        self.location
            .as_deref()
            .map_or(true, |location| record.location == location)
    }

    pub fn matches_session(&self, record: &MeasurementRecord) -> bool {
        self.session_id
            .as_deref()
            .map_or(true, |session_id| record.session_id == session_id)
    }

    pub fn apply<'a>(
        &self,
        records: &'a [MeasurementRecord],
        now: NaiveDateTime,
    ) -> Vec<&'a MeasurementRecord> {
        records
            .iter()
            .filter(|record| self.matches(record, now))
            .collect()
    }
}
