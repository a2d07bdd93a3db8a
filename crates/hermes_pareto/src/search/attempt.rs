use crate::{
    error::ParetoError,
    oracle::solver_oracle::SolverOracle,
    problem::{
        problem_instance::ProblemInstance, search_options::SearchOptions, time_window::Time,
    },
    solution::{origin::Origin, solution::Solution},
};

/// Outcome of solving a constrained instance.
#[derive(Debug)]
pub enum Attempt {
    Feasible(Solution),
    /// Some jobs did not fit in the horizon. This steers the search, it is not
    /// an error.
    Infeasible { unassigned: usize },
}

impl Attempt {
    /// Solves `instance` and classifies the answer. A solver error is fatal
    /// and reported as [`ParetoError::SearchFailure`].
    pub fn solve<O>(
        oracle: &O,
        instance: ProblemInstance,
        options: &SearchOptions,
        origin: Origin,
        cutoff: Time,
    ) -> Result<Attempt, ParetoError>
    where
        O: SolverOracle + ?Sized,
    {
        let solution = oracle.solve(instance, options)?;

        if !solution.is_success() {
            return Err(ParetoError::SearchFailure {
                origin,
                cutoff,
                code: solution.code,
                message: solution.error.unwrap_or_default(),
            });
        }

        if solution.summary.unassigned > 0 {
            Ok(Attempt::Infeasible {
                unassigned: solution.summary.unassigned,
            })
        } else {
            Ok(Attempt::Feasible(solution.tagged(origin)))
        }
    }
}
