use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Cost = u64;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename = "Summary")]
pub struct Summary {
    #[serde(default)]
    pub cost: Cost,

    /// Number of jobs left out of every route.
    #[serde(default)]
    pub unassigned: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computing_times: Option<Value>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
