use tracing::{debug, instrument};

use crate::{
    error::ParetoError,
    oracle::solver_oracle::SolverOracle,
    problem::{
        problem_instance::ProblemInstance, search_options::SearchOptions, time_window::Time,
    },
    solution::{origin::Origin, route::Route, solution::Solution},
};

use super::attempt::Attempt;

/// Range of completion times the dichotomy searches in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Horizon {
    pub earliest: Time,
    pub latest: Time,
}

impl Horizon {
    /// Bounds derived from the unconstrained solution: its latest route end,
    /// and its earliest route end unless a vehicle was left idle, in which
    /// case the earliest vehicle window start is used instead.
    ///
    /// Vehicles without a window count as starting at 0. `None` when the
    /// solution has no routes.
    pub fn from_reference(instance: &ProblemInstance, reference: &Solution) -> Option<Horizon> {
        let latest = reference.routes.iter().map(Route::completion_time).max()?;
        let mut earliest = reference.routes.iter().map(Route::completion_time).min()?;

        // An idle vehicle means the shortest route says nothing about how
        // early the jobs could be done.
        if reference.routes.len() < instance.vehicles.len() {
            earliest = instance.earliest_window_start().unwrap_or(0);
        }

        Some(Horizon { earliest, latest })
    }

    /// Midpoint of the range, rounded half to even.
    pub fn midpoint(&self) -> Time {
        midpoint(self.earliest, self.latest)
    }

    pub fn is_converged(&self, candidate: Time) -> bool {
        self.earliest >= self.latest || candidate == self.earliest || candidate == self.latest
    }
}

/// `round((a + b) / 2)` with ties going to the even neighbour.
pub fn midpoint(a: Time, b: Time) -> Time {
    let sum = a as u128 + b as u128;
    let half = sum / 2;

    let rounded = if sum % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    };

    rounded as Time
}

/// Bisects the completion time horizon: every feasible cutoff becomes the new
/// upper bound, every infeasible one the new lower bound.
///
/// Returns the feasible solutions in discovery order, starting with
/// `reference` when it is feasible itself.
#[instrument(skip_all, level = "debug")]
pub fn dichotomy<O>(
    instance: &ProblemInstance,
    options: &SearchOptions,
    reference: &Solution,
    oracle: &O,
) -> Result<Vec<Solution>, ParetoError>
where
    O: SolverOracle + ?Sized,
{
    let mut solutions = Vec::new();

    if reference.is_feasible() {
        solutions.push(reference.clone().tagged(Origin::Dichotomy));
    }

    let Some(mut horizon) = Horizon::from_reference(instance, reference) else {
        debug!("Dichotomy: reference solution has no route, nothing to tighten");
        return Ok(solutions);
    };

    let base = instance.with_default_windows(horizon.latest);

    debug!(
        "Dichotomy: searching between {} and {}",
        horizon.earliest, horizon.latest
    );

    let mut candidate = horizon.midpoint();
    while !horizon.is_converged(candidate) {
        match Attempt::solve(
            oracle,
            base.with_horizon(candidate),
            options,
            Origin::Dichotomy,
            candidate,
        )? {
            Attempt::Feasible(solution) => {
                debug!(
                    "Dichotomy: cutoff {} feasible, completion = {}, cost = {}",
                    candidate,
                    solution.completion_time(),
                    solution.cost()
                );
                solutions.push(solution);
                horizon.latest = candidate;
            }
            Attempt::Infeasible { unassigned } => {
                debug!(
                    "Dichotomy: cutoff {} infeasible, unassigned = {}",
                    candidate, unassigned
                );
                horizon.earliest = candidate;
            }
        }

        candidate = horizon.midpoint();
    }

    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::{time_window::TimeWindow, vehicle::Vehicle},
        test_utils::{ScriptedOracle, ThresholdOracle, create_solution, horizon_of},
    };

    use super::*;

    fn unconstrained_fleet(size: u64) -> ProblemInstance {
        ProblemInstance::new((1..=size).map(Vehicle::new).collect())
    }

    #[test]
    fn test_midpoint_rounds_half_to_even() {
        assert_eq!(midpoint(0, 120), 60);
        assert_eq!(midpoint(60, 75), 68);
        assert_eq!(midpoint(68, 75), 72);
        assert_eq!(midpoint(72, 75), 74);
        assert_eq!(midpoint(72, 73), 72);
        assert_eq!(midpoint(73, 74), 74);
        assert_eq!(midpoint(1, 2), 2);
        assert_eq!(midpoint(Time::MAX, Time::MAX), Time::MAX);
    }

    #[test]
    fn test_horizon_with_idle_vehicle() {
        let reference = create_solution(&[100, 120], 500, 0);

        let horizon = Horizon::from_reference(&unconstrained_fleet(3), &reference).unwrap();

        assert_eq!(
            horizon,
            Horizon {
                earliest: 0,
                latest: 120
            }
        );
    }

    #[test]
    fn test_horizon_with_every_vehicle_used() {
        let reference = create_solution(&[100, 120], 500, 0);

        let horizon = Horizon::from_reference(&unconstrained_fleet(2), &reference).unwrap();

        assert_eq!(
            horizon,
            Horizon {
                earliest: 100,
                latest: 120
            }
        );
        assert_eq!(horizon.midpoint(), 110);
    }

    #[test]
    fn test_horizon_idle_vehicle_uses_earliest_window_start() {
        let instance = ProblemInstance::new(vec![
            Vehicle::new(1).with_time_window(30, 200),
            Vehicle::new(2).with_time_window(45, 200),
            Vehicle::new(3).with_time_window(60, 200),
        ]);
        let reference = create_solution(&[150, 170], 500, 0);

        let horizon = Horizon::from_reference(&instance, &reference).unwrap();

        assert_eq!(horizon.earliest, 30);
        assert_eq!(horizon.latest, 170);
    }

    #[test]
    fn test_first_candidate_cutoff() {
        // The third vehicle stays idle, which pulls `earliest` down to the
        // smallest window start (0). With only the two used vehicles the
        // first candidate would be 110, see `test_horizon_with_every_vehicle_used`.
        let instance = unconstrained_fleet(3);
        let reference = create_solution(&[100, 120], 500, 0);
        // Infeasible at 60, then feasible at 90, 75, 68, 64, 62 and 61.
        let oracle = ScriptedOracle::new(vec![
            create_solution(&[], 0, 1),
            create_solution(&[90], 510, 0),
            create_solution(&[75], 520, 0),
            create_solution(&[68], 530, 0),
            create_solution(&[64], 540, 0),
            create_solution(&[62], 550, 0),
            create_solution(&[61], 560, 0),
        ]);

        dichotomy(&instance, &SearchOptions::default(), &reference, &oracle).unwrap();

        let calls = oracle.calls.borrow();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls[0].vehicles.len(), 3);
        for vehicle in &calls[0].vehicles {
            assert_eq!(vehicle.time_window, Some(TimeWindow::new(0, 60)));
        }

        let cutoffs: Vec<Time> = calls.iter().filter_map(horizon_of).collect();
        assert_eq!(cutoffs, vec![60, 90, 75, 68, 64, 62, 61]);

        // The caller's instance is never touched.
        assert!(instance.vehicles.iter().all(|v| v.time_window.is_none()));
    }

    #[test]
    fn test_dichotomy_converges_to_threshold() {
        let instance = unconstrained_fleet(2);
        let oracle = ThresholdOracle::new(73, 120);
        let reference = create_solution(&[120], 1000, 0);

        let solutions =
            dichotomy(&instance, &SearchOptions::default(), &reference, &oracle).unwrap();

        let completions: Vec<Time> = solutions.iter().map(Solution::completion_time).collect();
        assert_eq!(completions, vec![120, 90, 75, 74, 73]);
        assert!(
            solutions
                .iter()
                .all(|solution| solution.origin == Some(Origin::Dichotomy))
        );
    }

    #[test]
    fn test_dichotomy_call_bound() {
        let instance = unconstrained_fleet(2);
        let reference = create_solution(&[120], 1000, 0);
        // earliest = 0, latest = 120
        let bound = (121f64).log2().ceil() as usize + 1;

        for threshold in 1..=120 {
            let oracle = ThresholdOracle::new(threshold, 120);
            let solutions =
                dichotomy(&instance, &SearchOptions::default(), &reference, &oracle).unwrap();

            assert!(
                oracle.call_count() <= bound,
                "threshold {threshold}: {} calls",
                oracle.call_count()
            );
            let best = solutions.iter().map(Solution::completion_time).min();
            assert_eq!(best, Some(threshold));
        }
    }

    #[test]
    fn test_infeasible_reference_is_not_kept() {
        let instance = unconstrained_fleet(1);
        let reference = create_solution(&[120], 1000, 2);
        let oracle = ThresholdOracle::new(200, 120);

        let solutions =
            dichotomy(&instance, &SearchOptions::default(), &reference, &oracle).unwrap();

        assert!(solutions.is_empty());
    }

    #[test]
    fn test_reference_without_routes() {
        let instance = unconstrained_fleet(1);
        let reference = create_solution(&[], 0, 0);
        let oracle = ScriptedOracle::new(vec![]);

        let solutions =
            dichotomy(&instance, &SearchOptions::default(), &reference, &oracle).unwrap();

        assert_eq!(solutions.len(), 1);
        assert!(oracle.calls.borrow().is_empty());
    }

    #[test]
    fn test_solver_error_stops_search() {
        let instance = unconstrained_fleet(3);
        let reference = create_solution(&[100, 120], 500, 0);
        let oracle = ScriptedOracle::new(vec![
            create_solution(&[60], 600, 0),
            Solution::failure(2, "Internal error"),
        ]);

        let result = dichotomy(&instance, &SearchOptions::default(), &reference, &oracle);

        assert!(matches!(
            result,
            Err(ParetoError::SearchFailure {
                origin: Origin::Dichotomy,
                cutoff: 30,
                code: 2,
                ..
            })
        ));
    }
}
