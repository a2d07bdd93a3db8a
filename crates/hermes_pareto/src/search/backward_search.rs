use tracing::{debug, instrument};

use crate::{
    error::ParetoError,
    oracle::solver_oracle::SolverOracle,
    problem::{problem_instance::ProblemInstance, search_options::SearchOptions},
    solution::{origin::Origin, solution::Solution},
};

use super::attempt::Attempt;

/// Shrinks the horizon one second at a time below the completion time of the
/// last feasible solution, until the solver can no longer place every job.
///
/// Returns the feasible solutions in discovery order, starting with
/// `reference`. The infeasible attempt that ends the search is discarded.
#[instrument(skip_all, level = "debug")]
pub fn backward_search<O>(
    instance: &ProblemInstance,
    options: &SearchOptions,
    reference: &Solution,
    oracle: &O,
) -> Result<Vec<Solution>, ParetoError>
where
    O: SolverOracle + ?Sized,
{
    let mut solutions = Vec::new();

    if !reference.is_feasible() {
        debug!("BackwardSearch: reference solution is infeasible");
        return Ok(solutions);
    }

    let mut latest = reference.completion_time();
    let base = instance.with_default_windows(latest);
    let mut current = Some(reference.clone());

    while let Some(solution) = current.take() {
        solutions.push(solution.tagged(Origin::BackwardSearch));

        let Some(new_end) = latest.checked_sub(1) else {
            break;
        };

        match Attempt::solve(
            oracle,
            base.with_horizon(new_end),
            options,
            Origin::BackwardSearch,
            new_end,
        )? {
            Attempt::Feasible(solution) => {
                // Never trust the solver to honour the cutoff, the horizon
                // must shrink for the search to end.
                latest = solution.completion_time().min(new_end);
                current = Some(solution);
            }
            Attempt::Infeasible { unassigned } => {
                debug!(
                    "BackwardSearch: stopped at cutoff {}, unassigned = {}",
                    new_end, unassigned
                );
            }
        }
    }

    Ok(solutions)
}
