//! Fixed lookup tables the generator draws from.

pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub struct SessionTemplate {
    pub name: &'static str,
    /// Minutes after midnight.
    pub base_minutes: u32,
}

pub const PHOTO_LOCATION: &str = "Columbia Area";

pub static LOCATIONS: [Location; 9] = [
    Location { name: "Upper Manhattan", lat: 40.8448, lng: -73.9388 },
    Location { name: "Central Park", lat: 40.7829, lng: -73.9654 },
    Location { name: "Midtown East", lat: 40.7549, lng: -73.9680 },
    Location { name: "Midtown West", lat: 40.7580, lng: -73.9855 },
    Location { name: "Chelsea", lat: 40.7465, lng: -73.9972 },
    Location { name: "Greenwich Village", lat: 40.7336, lng: -74.0027 },
    Location { name: "Lower Manhattan", lat: 40.7074, lng: -74.0113 },
    Location { name: "East Village", lat: 40.7264, lng: -73.9818 },
    Location { name: PHOTO_LOCATION, lat: 40.8075, lng: -73.9626 },
];

const fn at(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

pub static SESSION_TEMPLATES: [SessionTemplate; 8] = [
    SessionTemplate { name: "School Yard", base_minutes: at(8, 30) },
    SessionTemplate { name: "Corner Deli", base_minutes: at(11, 45) },
    SessionTemplate { name: "Gym Pickup", base_minutes: at(14, 15) },
    SessionTemplate { name: "Bowling Alley", base_minutes: at(17, 30) },
    SessionTemplate { name: "Morningside Park", base_minutes: at(16, 0) },
    SessionTemplate { name: "Rooftop Deck", base_minutes: at(10, 15) },
    SessionTemplate { name: "Bus Stop", base_minutes: at(7, 20) },
    SessionTemplate { name: "Skate Park", base_minutes: at(18, 5) },
];

/// Session names used for the campus location instead of the walk's name.
pub static CAMPUS_SESSION_NAMES: [&str; 8] = [
    "Campus Walk",
    "Library Steps",
    "Quad Area",
    "Campus Entrance",
    "Student Center",
    "Campus Plaza",
    "Main Gate",
    "Campus Path",
];

pub static NOTE_SAMPLES: [&str; 7] = [
    "Someone was smoking near the gate.",
    "Hardly any cars today.",
    "Wind picked up while we were there.",
    "Trash truck stopped right next to us.",
    "Kids were playing soccer close by.",
    "Construction noise but no dust.",
    "Delivery scooters kept idling.",
];

pub static CAMPUS_PHOTO_URLS: [&str; 2] = [
    "https://i.pinimg.com/736x/34/c5/9c/34c59c303c3b6c34e67163287422fe4c.jpg",
    "https://i.pinimg.com/1200x/06/67/37/066737e07b09cf50c9afef205189dcbf.jpg",
];

/// Readings are only taken between these clock times (minutes after midnight).
pub const EARLIEST_READING: u32 = at(6, 0);
pub const LATEST_READING: u32 = at(21, 0);
