use chrono::{Duration, NaiveDateTime, NaiveTime};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::Serialize;

use crate::dataset::catalog::{
    CAMPUS_PHOTO_URLS, CAMPUS_SESSION_NAMES, EARLIEST_READING, LATEST_READING, LOCATIONS,
    NOTE_SAMPLES, PHOTO_LOCATION, SESSION_TEMPLATES,
};
use crate::dataset::models::{round_to_hundredths, Environment, MeasurementRecord, Photo};
use crate::log_info;

const ENABLE_LOGS: bool = true;

const MAX_SESSIONS_PER_DAY: usize = 3;
const LOCATION_STAGGER_MINUTES: u32 = 3;
const NOTE_PROBABILITY: f64 = 0.35;
const PHOTO_SPACING_SECS: i64 = 30;
const DETAIL_READING_COUNT: i64 = 60;

/// Seeded when a seed is configured, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Builds the synthetic dataset: `lookback_days` days ending at `now`, one to
/// three walks per day, one reading per location per walk. Returned newest
/// first.
pub fn generate_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
    lookback_days: u32,
) -> Vec<MeasurementRecord> {
    let mut records = Vec::new();
    let mut session_counter = 0u32;

    for days_back in 0..lookback_days {
        let day = now - Duration::days(i64::from(days_back));
        let date = day.date();
        let day_millis = day.and_utc().timestamp_millis();

        let sessions_today = rng.gen_range(1..=MAX_SESSIONS_PER_DAY);
        let templates: Vec<_> = SESSION_TEMPLATES
            .choose_multiple(rng, sessions_today)
            .collect();

        for template in templates {
            session_counter += 1;
            let session_id = format!("SESSION-{session_counter:03}");
            let base = template.base_minutes as i32 + rng.gen_range(-15..=15);

            for (index, location) in LOCATIONS.iter().enumerate() {
                let is_campus = location.name == PHOTO_LOCATION;
                let session_name = if is_campus {
                    CAMPUS_SESSION_NAMES[rng.gen_range(0..CAMPUS_SESSION_NAMES.len())]
                } else {
                    template.name
                };

                let minutes = (base + (index as u32 * LOCATION_STAGGER_MINUTES) as i32)
                    .clamp(EARLIEST_READING as i32, LATEST_READING as i32) as u32;
                let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
                    .unwrap_or(NaiveTime::MIN);

                let photos = if is_campus {
                    campus_photos(date.and_time(time))
                } else {
                    Vec::new()
                };

                let session_notes = if rng.gen_bool(NOTE_PROBABILITY) {
                    NOTE_SAMPLES[rng.gen_range(0..NOTE_SAMPLES.len())].to_string()
                } else {
                    String::new()
                };

                let indoor_outdoor = if rng.gen_bool(0.5) {
                    Environment::Indoor
                } else {
                    Environment::Outdoor
                };

                records.push(MeasurementRecord {
                    id: format!("{day_millis}-{session_id}-{index}"),
                    date,
                    time,
                    session_id: session_id.clone(),
                    session_name: session_name.to_string(),
                    session_notes,
                    location: location.name.to_string(),
                    latitude: location.lat,
                    longitude: location.lng,
                    indoor_outdoor,
                    pm25: rng.gen_range(3..=27),
                    co: round_to_hundredths(rng.gen_range(0.2..1.0)),
                    temp: rng.gen_range(60..=74),
                    humidity: rng.gen_range(35..=64),
                    photos,
                });
            }
        }
    }

    records.sort_by(|a, b| b.taken_at().cmp(&a.taken_at()));

    log_info!(
        "Generated {} records across {} sessions",
        records.len(),
        session_counter
    );

    records
}

fn campus_photos(taken_at: NaiveDateTime) -> Vec<Photo> {
    CAMPUS_PHOTO_URLS
        .iter()
        .enumerate()
        .map(|(index, url)| Photo {
            url: (*url).to_string(),
            timestamp: Some(taken_at + Duration::seconds(index as i64 * PHOTO_SPACING_SECS)),
        })
        .collect()
}

/// One second of the expanded per-row view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailReading {
    pub id: String,
    pub time: NaiveTime,
    pub pm25: u32,
    pub co: f64,
    pub temp: i32,
    pub humidity: u8,
}

/// A minute of per-second readings jittered around `record`.
pub fn detail_readings<R: Rng + ?Sized>(
    rng: &mut R,
    record: &MeasurementRecord,
) -> Vec<DetailReading> {
    let start = record.taken_at();

    (0..DETAIL_READING_COUNT)
        .map(|second| {
            let pm25 = (i64::from(record.pm25) + rng.gen_range(-2..=2)).max(0) as u32;
            let humidity = (i32::from(record.humidity) + rng.gen_range(-2..=2)).clamp(0, 100) as u8;

            DetailReading {
                id: format!("{}-{second}", record.id),
                time: (start + Duration::seconds(second)).time(),
                pm25,
                co: round_to_hundredths(record.co + rng.gen_range(-0.05..0.05)),
                temp: record.temp + rng.gen_range(-1..=1),
                humidity,
            }
        })
        .collect()
}
