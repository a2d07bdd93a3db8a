use thiserror::Error;

use crate::{
    problem::{problem_instance::ProblemInstance, search_options::SearchOptions},
    solution::solution::Solution,
};

/// Errors raised before the solver could produce an answer at all.
///
/// A solver that runs but fails reports it through [`Solution::code`] instead.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Failed to start solver {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Solver I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid solver payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Solver exited with {status} without output: {stderr}")]
    NoOutput { status: String, stderr: String },
}

/// Black-box routing solver.
///
/// Each call receives its own instance; implementations may consume or
/// mutate it freely.
pub trait SolverOracle {
    fn solve(
        &self,
        instance: ProblemInstance,
        options: &SearchOptions,
    ) -> Result<Solution, OracleError>;
}
