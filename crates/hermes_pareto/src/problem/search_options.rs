use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Solver arguments, handed to every solver call unchanged.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct SearchOptions {
    args: Vec<String>,
}

impl SearchOptions {
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
