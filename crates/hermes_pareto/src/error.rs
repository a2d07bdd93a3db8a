use thiserror::Error;

use crate::{
    oracle::solver_oracle::OracleError, problem::time_window::Time, report::renderer::RenderError,
    solution::origin::Origin,
};

#[derive(Debug, Error)]
pub enum ParetoError {
    /// The initial, unconstrained solve failed. Nothing can be searched.
    #[error("Solver failed with code {code}: {message}")]
    SolverFailure { code: i32, message: String },

    /// The solver reported an error while exploring a horizon.
    #[error("Solver failed with code {code} during {origin} at cutoff {cutoff}: {message}")]
    SearchFailure {
        origin: Origin,
        cutoff: Time,
        code: i32,
        message: String,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("No solution assigns every job ({unassigned} unassigned in the unconstrained solution)")]
    NoFeasibleSolution { unassigned: usize },

    #[error("Frontier is empty")]
    EmptyFrontier,
}
