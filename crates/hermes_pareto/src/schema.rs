use schemars::schema_for;

use crate::{asap::AsapRequest, report::frontier_reporter::AsapOutput};

pub fn generate_request_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(AsapRequest))
}

pub fn generate_output_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(AsapOutput))
}
