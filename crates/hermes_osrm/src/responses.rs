use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OsrmRoute {
    /// Seconds
    pub duration: f64,

    /// Meters
    pub distance: f64,

    /// Encoded polyline, or GeoJSON depending on the `geometries` argument
    #[serde(default)]
    pub geometry: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OsrmRouteResponse {
    pub code: String,

    #[serde(default)]
    pub routes: Vec<OsrmRoute>,

    #[serde(default)]
    pub waypoints: Vec<Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OsrmTableResponse {
    pub code: String,

    /// Travel times in seconds, `None` for unreachable pairs
    #[serde(default)]
    pub durations: Vec<Vec<Option<f64>>>,

    /// Distances in meters, `None` for unreachable pairs
    #[serde(default)]
    pub distances: Vec<Vec<Option<f64>>>,
}
