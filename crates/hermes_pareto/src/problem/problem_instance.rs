use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::search::horizon;

use super::{
    time_window::{Time, TimeWindow},
    vehicle::Vehicle,
};

/// Solver input. The search only reads and rewrites `vehicles`, the rest of
/// the document (jobs, shipments, matrices, ...) is opaque.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "ProblemInstance")]
pub struct ProblemInstance {
    pub vehicles: Vec<Vehicle>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProblemInstance {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        ProblemInstance {
            vehicles,
            fields: Map::new(),
        }
    }

    /// Returns a copy of this instance where every vehicle without a time
    /// window is given `[0, latest]`.
    pub fn with_default_windows(&self, latest: Time) -> ProblemInstance {
        let vehicles = self
            .vehicles
            .iter()
            .map(|vehicle| {
                let mut vehicle = vehicle.clone();
                if vehicle.time_window.is_none() {
                    vehicle.time_window = Some(TimeWindow::new(0, latest));
                }
                vehicle
            })
            .collect();

        ProblemInstance {
            vehicles,
            fields: self.fields.clone(),
        }
    }

    /// Returns a copy of this instance where no vehicle is available after
    /// `cutoff`. `self` is left untouched.
    pub fn with_horizon(&self, cutoff: Time) -> ProblemInstance {
        ProblemInstance {
            vehicles: horizon::constrain(&self.vehicles, cutoff),
            fields: self.fields.clone(),
        }
    }

    /// Smallest window start over all vehicles, a vehicle without a window
    /// counting as available from 0.
    pub fn earliest_window_start(&self) -> Option<Time> {
        self.vehicles.iter().map(Vehicle::window_start).min()
    }
}
