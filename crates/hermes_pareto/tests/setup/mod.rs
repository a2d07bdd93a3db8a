use std::cell::Cell;

use hermes_pareto::{
    oracle::solver_oracle::{OracleError, SolverOracle},
    problem::{
        problem_instance::ProblemInstance, search_options::SearchOptions, time_window::Time,
        vehicle::Vehicle,
    },
    solution::{
        route::{Route, Step},
        solution::Solution,
        summary::Summary,
    },
};
use serde_json::json;

/// Solver stand-in: the jobs fit as long as one vehicle is available until
/// `threshold`. Shorter horizons cost more, and completion times divisible by
/// 3 carry an extra penalty so that some answers are dominated.
pub struct TradeOffOracle {
    pub threshold: Time,
    pub free_completion: Time,
    pub calls: Cell<usize>,
}

impl TradeOffOracle {
    pub fn new(threshold: Time, free_completion: Time) -> Self {
        TradeOffOracle {
            threshold,
            free_completion,
            calls: Cell::new(0),
        }
    }
}

impl SolverOracle for TradeOffOracle {
    fn solve(
        &self,
        instance: ProblemInstance,
        _options: &SearchOptions,
    ) -> Result<Solution, OracleError> {
        self.calls.set(self.calls.get() + 1);

        let horizon = instance
            .vehicles
            .iter()
            .map(|vehicle| {
                vehicle
                    .time_window
                    .map_or(self.free_completion, |window| window.end())
            })
            .max()
            .unwrap_or(0);
        let completion = horizon.min(self.free_completion);

        if completion < self.threshold {
            return Ok(Solution::new(
                vec![],
                Summary {
                    unassigned: 1,
                    ..Summary::default()
                },
            ));
        }

        let penalty = if completion % 3 == 0 { 25 } else { 0 };
        let cost = 1000 + (self.free_completion - completion) * 10 + penalty;

        Ok(Solution::new(
            vec![Route::new(vec![
                Step::at(0),
                Step::at(completion / 2),
                Step::at(completion),
            ])],
            Summary {
                cost,
                unassigned: 0,
                computing_times: Some(json!({ "loading": 1, "solving": 2 })),
                ..Summary::default()
            },
        ))
    }
}

pub fn create_fleet(size: u64) -> ProblemInstance {
    let mut instance = ProblemInstance::new((1..=size).map(Vehicle::new).collect());
    instance.fields.insert(
        "jobs".to_owned(),
        json!([{ "id": 1, "location": [2.35, 48.85] }]),
    );
    instance
}
