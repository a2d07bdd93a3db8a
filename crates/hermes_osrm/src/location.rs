use serde::{Deserialize, Serialize};

/// `[longitude, latitude]`, the coordinate order OSRM expects.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Location {
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    pub fn new(lon: f64, lat: f64) -> Self {
        Location { lon, lat }
    }
}

impl From<[f64; 2]> for Location {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Location { lon, lat }
    }
}

impl From<Location> for [f64; 2] {
    fn from(value: Location) -> Self {
        [value.lon, value.lat]
    }
}

impl From<&Location> for geo_types::Point {
    fn from(value: &Location) -> Self {
        geo_types::Point::new(value.lon, value.lat)
    }
}
