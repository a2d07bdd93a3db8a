use fxhash::FxHashSet;

use crate::{
    problem::time_window::Time,
    solution::{solution::Solution, summary::Cost},
};

/// `a` is strictly better than `b` on both completion time and cost.
pub fn dominates(a: (Time, Cost), b: (Time, Cost)) -> bool {
    a.0 < b.0 && a.1 < b.1
}

/// Reduces candidate solutions to a frontier: sorted by increasing completion
/// time, without dominated solutions and without duplicated
/// `(completion, cost)` pairs.
pub fn reduce(mut candidates: Vec<Solution>) -> Vec<Solution> {
    // Stable, equal completion times keep their input order.
    candidates.sort_by_key(Solution::completion_time);

    filter_unique(filter_dominated(candidates))
}

/// Drops every solution dominated by another one.
pub fn filter_dominated(solutions: Vec<Solution>) -> Vec<Solution> {
    let objectives: Vec<(Time, Cost)> = solutions.iter().map(Solution::objectives).collect();

    let keep: Vec<bool> = objectives
        .iter()
        .map(|&candidate| !objectives.iter().any(|&other| dominates(other, candidate)))
        .collect();

    solutions
        .into_iter()
        .zip(keep)
        .filter_map(|(solution, keep)| keep.then_some(solution))
        .collect()
}

/// Keeps the first solution of each `(completion, cost)` pair.
pub fn filter_unique(solutions: Vec<Solution>) -> Vec<Solution> {
    let mut seen = FxHashSet::default();

    solutions
        .into_iter()
        .filter(|solution| seen.insert(solution.objectives()))
        .collect()
}
