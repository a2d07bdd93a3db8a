use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::problem::time_window::Time;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "Step")]
pub struct Step {
    pub arrival: Time,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Step {
    pub fn at(arrival: Time) -> Self {
        Step {
            arrival,
            fields: Map::new(),
        }
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "Route")]
pub struct Route {
    #[serde(default)]
    pub steps: Vec<Step>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Route {
    pub fn new(steps: Vec<Step>) -> Self {
        Route {
            steps,
            fields: Map::new(),
        }
    }

    /// Arrival at the last step, 0 for a route without steps.
    pub fn completion_time(&self) -> Time {
        self.steps.last().map_or(0, |step| step.arrival)
    }
}
