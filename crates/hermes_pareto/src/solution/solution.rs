use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::problem::time_window::Time;

use super::{
    origin::Origin,
    route::Route,
    summary::{Cost, Summary},
};

/// Result of one solver call.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "Solution")]
pub struct Solution {
    /// 0 on success.
    #[serde(default)]
    pub code: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub summary: Summary,

    /// Set by the search procedure that found the solution, removed before
    /// the solution leaves the crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Solution {
    pub fn new(routes: Vec<Route>, summary: Summary) -> Self {
        Solution {
            code: 0,
            error: None,
            routes,
            summary,
            origin: None,
            fields: Map::new(),
        }
    }

    pub fn failure(code: i32, error: impl Into<String>) -> Self {
        Solution {
            code,
            error: Some(error.into()),
            routes: Vec::new(),
            summary: Summary::default(),
            origin: None,
            fields: Map::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Solved without error and with every job on a route.
    pub fn is_feasible(&self) -> bool {
        self.is_success() && self.summary.unassigned == 0
    }

    /// Latest arrival over all routes, 0 without routes.
    pub fn completion_time(&self) -> Time {
        self.routes
            .iter()
            .map(Route::completion_time)
            .max()
            .unwrap_or(0)
    }

    pub fn cost(&self) -> Cost {
        self.summary.cost
    }

    /// `(completion time, cost)`, the two minimized objectives.
    pub fn objectives(&self) -> (Time, Cost) {
        (self.completion_time(), self.cost())
    }

    pub fn tagged(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}
