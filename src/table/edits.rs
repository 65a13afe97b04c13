//! In-place cell edits and their provenance.
//!
//! Every edit replaces the stored record with a reformatted copy and marks
//! the `(row, field)` pair, even when the new value equals the old one.
//! There is no undo; provenance only resets when the dataset is regenerated.

use std::collections::{BTreeSet, HashMap};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::dataset::{models::round_to_hundredths, Environment, MeasurementRecord};
use crate::log_debug;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum EditableField {
    SessionName,
    SessionNotes,
    IndoorOutdoor,
    Pm25,
    Co,
    Temp,
    Humidity,
}

/// Raw cell input after its field formatter ran.
#[derive(Debug, Clone, PartialEq)]
enum Formatted {
    Text(String),
    Environment(Environment),
    Pm25(u32),
    Co(f64),
    Temp(i32),
    Humidity(u8),
}

impl EditableField {
    fn format(&self, raw: &str) -> Result<Formatted> {
        Ok(match self {
            EditableField::SessionName | EditableField::SessionNotes => {
                Formatted::Text(raw.to_string())
            }
            EditableField::IndoorOutdoor => Formatted::Environment(Environment::parse(raw)?),
            EditableField::Pm25 => {
                let value = leading_number(raw, false).unwrap_or(0.0);
                Formatted::Pm25(value.max(0.0).min(f64::from(u32::MAX)) as u32)
            }
            EditableField::Temp => Formatted::Temp(round_half_up(whole_number(raw)) as i32),
            EditableField::Humidity => {
                Formatted::Humidity(round_half_up(whole_number(raw)).clamp(0.0, 100.0) as u8)
            }
            EditableField::Co => {
                Formatted::Co(round_to_hundredths(leading_number(raw, true).unwrap_or(0.0)))
            }
        })
    }
}

/// Whole-string numeric parse; anything unparseable or non-finite is 0.
fn whole_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses the longest numeric prefix (`-12`, `3.5` from `3.5ppm`, `0.01`
/// from `1e-2`). Integer mode stops at the decimal point and ignores
/// exponents.
fn leading_number(raw: &str, allow_fraction: bool) -> Option<f64> {
    let trimmed = raw.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > fraction_start || has_digits {
            end = fraction_end;
            has_digits |= fraction_end > fraction_start;
        }
    }

    if !has_digits {
        return None;
    }
    let mantissa = trimmed[..end].trim_end_matches('.');

    let mut exponent_end = end;
    if allow_fraction && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_digits = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_digits {
            exponent_end = cursor;
        }
    }

    format!("{mantissa}{}", &trimmed[end..exponent_end])
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Which `(row, field)` cells hold user-entered values.
#[derive(Debug, Clone, Default)]
pub struct EditTracker {
    edited: HashMap<String, BTreeSet<EditableField>>,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, row_id: &str, field: EditableField) {
        self.edited
            .entry(row_id.to_string())
            .or_default()
            .insert(field);
    }

    pub fn is_edited(&self, row_id: &str, field: EditableField) -> bool {
        self.edited
            .get(row_id)
            .is_some_and(|fields| fields.contains(&field))
    }

    pub fn edited_fields(&self, row_id: &str) -> Vec<EditableField> {
        self.edited
            .get(row_id)
            .map(|fields| fields.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of edited cells.
    pub fn len(&self) -> usize {
        self.edited.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Formats `raw` for `field` and stores it on row `row_id`.
    ///
    /// Session names are shared by every record of a session, so editing one
    /// renames the whole session. Returns the ids of every touched row.
    pub fn edit_field(
        &mut self,
        records: &mut [MeasurementRecord],
        row_id: &str,
        field: EditableField,
        raw: &str,
    ) -> Result<Vec<String>> {
        let index = records
            .iter()
            .position(|record| record.id == row_id)
            .ok_or_else(|| anyhow!("record {row_id} not found"))?;

        if field == EditableField::SessionName {
            let session_id = records[index].session_id.clone();
            return self.rename_session(records, &session_id, raw);
        }

        let formatted = field.format(raw)?;
        let current = &records[index];
        let mut updated = current.clone();
        match formatted {
            Formatted::Text(text) => updated.session_notes = text,
            Formatted::Environment(environment) => updated.indoor_outdoor = environment,
            Formatted::Pm25(value) => updated.pm25 = value,
            Formatted::Co(value) => updated.co = value,
            Formatted::Temp(value) => updated.temp = value,
            Formatted::Humidity(value) => updated.humidity = value,
        }
        records[index] = updated;
        self.mark(row_id, field);

        log_debug!("Edited {field:?} on {row_id}");
        Ok(vec![row_id.to_string()])
    }

    /// Renames every record of `session_id` and marks each one.
    pub fn rename_session(
        &mut self,
        records: &mut [MeasurementRecord],
        session_id: &str,
        name: &str,
    ) -> Result<Vec<String>> {
        let mut affected = Vec::new();
        for record in records.iter_mut().filter(|r| r.session_id == session_id) {
            *record = MeasurementRecord {
                session_name: name.to_string(),
                ..record.clone()
            };
            affected.push(record.id.clone());
        }

        if affected.is_empty() {
            return Err(anyhow!("session {session_id} not found"));
        }
        for row_id in &affected {
            self.mark(row_id, EditableField::SessionName);
        }

        log_debug!("Renamed {session_id} across {} records", affected.len());
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{generate_dataset, make_rng};
    use chrono::NaiveDate;

    fn records() -> Vec<MeasurementRecord> {
        let now = NaiveDate::from_ymd_opt(2025, 4, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        generate_dataset(&mut make_rng(Some(4)), now, 5)
    }

    #[test]
    fn formatters_follow_field_rules() {
        let fmt = |field: EditableField, raw: &str| field.format(raw).unwrap();

        assert_eq!(fmt(EditableField::Pm25, "12.9"), Formatted::Pm25(12));
        assert_eq!(fmt(EditableField::Pm25, "-4"), Formatted::Pm25(0));
        assert_eq!(fmt(EditableField::Pm25, "31ug"), Formatted::Pm25(31));
        assert_eq!(fmt(EditableField::Pm25, "abc"), Formatted::Pm25(0));

        assert_eq!(fmt(EditableField::Temp, "71.5"), Formatted::Temp(72));
        assert_eq!(fmt(EditableField::Temp, "-2.5"), Formatted::Temp(-2));
        assert_eq!(fmt(EditableField::Temp, ""), Formatted::Temp(0));

        assert_eq!(fmt(EditableField::Humidity, "140"), Formatted::Humidity(100));
        assert_eq!(fmt(EditableField::Humidity, "-3"), Formatted::Humidity(0));
        assert_eq!(fmt(EditableField::Humidity, "55.5"), Formatted::Humidity(56));
        assert_eq!(fmt(EditableField::Humidity, "wet"), Formatted::Humidity(0));

        assert_eq!(fmt(EditableField::Co, "0.456"), Formatted::Co(0.46));
        assert_eq!(fmt(EditableField::Co, ".5ppm"), Formatted::Co(0.5));
        assert_eq!(fmt(EditableField::Co, "x"), Formatted::Co(0.0));
        assert_eq!(fmt(EditableField::Co, "1e-2"), Formatted::Co(0.01));
        assert_eq!(fmt(EditableField::Co, "2.5E+1ppm"), Formatted::Co(25.0));
        assert_eq!(fmt(EditableField::Co, "3e"), Formatted::Co(3.0));
        assert_eq!(fmt(EditableField::Co, "4e-x"), Formatted::Co(4.0));
        assert_eq!(fmt(EditableField::Pm25, "2e3"), Formatted::Pm25(2));

        assert_eq!(
            fmt(EditableField::IndoorOutdoor, "outdoor"),
            Formatted::Environment(Environment::Outdoor)
        );
        assert!(EditableField::IndoorOutdoor.format("garage").is_err());
    }

    #[test]
    fn humidity_edit_clamps_to_bounds() {
        let mut records = records();
        let mut tracker = EditTracker::new();
        let row_id = records[0].id.clone();

        tracker
            .edit_field(&mut records, &row_id, EditableField::Humidity, "250")
            .unwrap();
        assert_eq!(records[0].humidity, 100);

        tracker
            .edit_field(&mut records, &row_id, EditableField::Humidity, "-40")
            .unwrap();
        assert_eq!(records[0].humidity, 0);
        assert!(tracker.is_edited(&row_id, EditableField::Humidity));
    }

    #[test]
    fn single_field_edit_touches_one_row() {
        let mut records = records();
        let before = records.clone();
        let mut tracker = EditTracker::new();
        let row_id = records[2].id.clone();

        let affected = tracker
            .edit_field(&mut records, &row_id, EditableField::SessionNotes, "windy")
            .unwrap();
        assert_eq!(affected, vec![row_id.clone()]);
        assert_eq!(records[2].session_notes, "windy");
        assert_eq!(tracker.edited_fields(&row_id), vec![EditableField::SessionNotes]);
        assert_eq!(tracker.len(), 1);

        for (index, (after, original)) in records.iter().zip(&before).enumerate() {
            if index != 2 {
                assert_eq!(after, original);
            }
        }
    }

    #[test]
    fn no_op_edit_still_marks_provenance() {
        let mut records = records();
        let mut tracker = EditTracker::new();
        let row_id = records[1].id.clone();
        let temp = records[1].temp.to_string();

        tracker
            .edit_field(&mut records, &row_id, EditableField::Temp, &temp)
            .unwrap();
        assert!(tracker.is_edited(&row_id, EditableField::Temp));
        assert!(!tracker.is_edited(&row_id, EditableField::Pm25));
    }

    #[test]
    fn session_rename_propagates_and_marks_all_rows() {
        let mut records = records();
        let mut tracker = EditTracker::new();
        let row_id = records[0].id.clone();
        let session_id = records[0].session_id.clone();
        let members = records
            .iter()
            .filter(|r| r.session_id == session_id)
            .count();

        let affected = tracker
            .edit_field(&mut records, &row_id, EditableField::SessionName, "Lunch Walk")
            .unwrap();
        assert_eq!(affected.len(), members);

        for record in &records {
            let in_session = record.session_id == session_id;
            assert_eq!(record.session_name == "Lunch Walk", in_session);
            assert_eq!(tracker.is_edited(&record.id, EditableField::SessionName), in_session);
        }
    }

    #[test]
    fn unknown_targets_are_rejected_without_changes() {
        let mut records = records();
        let before = records.clone();
        let mut tracker = EditTracker::new();

        assert!(tracker
            .edit_field(&mut records, "missing", EditableField::Pm25, "5")
            .is_err());
        assert!(tracker
            .rename_session(&mut records, "SESSION-999", "Ghost")
            .is_err());
        let row_id = records[0].id.clone();
        assert!(tracker
            .edit_field(&mut records, &row_id, EditableField::IndoorOutdoor, "attic")
            .is_err());

        assert_eq!(records, before);
        assert!(tracker.is_empty());
    }
}
