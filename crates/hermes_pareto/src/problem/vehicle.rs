use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::time_window::{Time, TimeWindow};

/// A vehicle of the solver input.
///
/// Only the availability window matters to the search; every other attribute
/// is carried through untouched.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "Vehicle")]
pub struct Vehicle {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<[Time; 2]>")]
    pub time_window: Option<TimeWindow>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Vehicle {
    pub fn new(id: u64) -> Self {
        Vehicle {
            id,
            time_window: None,
            attributes: Map::new(),
        }
    }

    pub fn with_time_window(mut self, start: Time, end: Time) -> Self {
        self.time_window = Some(TimeWindow::new(start, end));
        self
    }

    pub fn window_start(&self) -> Time {
        self.time_window.map_or(0, |window| window.start())
    }
}
