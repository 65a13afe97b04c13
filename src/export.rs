use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use crate::dataset::MeasurementRecord;

pub const CSV_HEADER: [&str; 13] = [
    "Date",
    "Time",
    "Session ID",
    "Session Name",
    "Notes",
    "Location",
    "Latitude",
    "Longitude",
    "INDOOR/OUTDOOR",
    "PM 2.5",
    "CO",
    "Temperature",
    "Humidity",
];

/// Header line plus one line per record, `\n` separated with no trailing
/// newline. Cells holding a comma, quote or line break are quoted.
pub fn records_to_csv<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a MeasurementRecord>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.time.format("%H:%M").to_string(),
            record.session_id.clone(),
            record.session_name.clone(),
            record.session_notes.clone(),
            record.location.clone(),
            record.latitude.to_string(),
            record.longitude.to_string(),
            record.indoor_outdoor.as_str().to_string(),
            record.pm25.to_string(),
            record.co_label(),
            record.temp.to_string(),
            record.humidity.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow!("failed to flush CSV: {}", err.error()))?;
    let mut csv = String::from_utf8(bytes).context("CSV output is not UTF-8")?;
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}

pub fn csv_file_name(today: NaiveDate) -> String {
    format!("air-quality-data-{}.csv", today.format("%Y-%m-%d"))
}

/// Deep link that drops a pin at the record's coordinates.
pub fn maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}
