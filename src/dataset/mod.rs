pub mod catalog;
pub mod generator;
pub mod models;

pub use generator::{detail_readings, generate_dataset, make_rng, DetailReading};
pub use models::{Environment, MeasurementRecord, Photo, SessionSummary};

/// Distinct location names in first-seen order.
pub fn unique_locations(records: &[MeasurementRecord]) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for record in records {
        if !seen.iter().any(|name| *name == record.location) {
            seen.push(record.location.clone());
        }
    }
    seen
}

/// Distinct sessions in first-seen order, named after their first record.
pub fn unique_sessions(records: &[MeasurementRecord]) -> Vec<SessionSummary> {
    let mut seen = Vec::<SessionSummary>::new();
    for record in records {
        if !seen.iter().any(|session| session.id == record.session_id) {
            seen.push(SessionSummary {
                id: record.session_id.clone(),
                name: record.session_name.clone(),
            });
        }
    }
    seen
}
