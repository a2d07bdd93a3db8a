use std::{cell::RefCell, collections::VecDeque};

use crate::{
    oracle::solver_oracle::{OracleError, SolverOracle},
    problem::{
        problem_instance::ProblemInstance, search_options::SearchOptions, time_window::Time,
    },
    solution::{
        route::{Route, Step},
        solution::Solution,
        summary::{Cost, Summary},
    },
};

/// Builds a solution with one route per completion time.
pub fn create_solution(completions: &[Time], cost: Cost, unassigned: usize) -> Solution {
    let routes = completions
        .iter()
        .map(|&completion| Route::new(vec![Step::at(0), Step::at(completion)]))
        .collect();

    Solution::new(
        routes,
        Summary {
            cost,
            unassigned,
            ..Summary::default()
        },
    )
}

/// Latest time any vehicle of `instance` is available, `None` when a vehicle
/// has no window.
pub fn horizon_of(instance: &ProblemInstance) -> Option<Time> {
    instance
        .vehicles
        .iter()
        .map(|vehicle| vehicle.time_window.map(|window| window.end()))
        .collect::<Option<Vec<_>>>()
        .and_then(|ends| ends.into_iter().max())
}

/// Solver whose single job fits as long as some vehicle is available until
/// `threshold`. Tighter horizons finish earlier but cost more.
pub struct ThresholdOracle {
    pub threshold: Time,
    pub free_completion: Time,
    pub calls: RefCell<Vec<ProblemInstance>>,
}

impl ThresholdOracle {
    pub fn new(threshold: Time, free_completion: Time) -> Self {
        ThresholdOracle {
            threshold,
            free_completion,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl SolverOracle for ThresholdOracle {
    fn solve(
        &self,
        instance: ProblemInstance,
        _options: &SearchOptions,
    ) -> Result<Solution, OracleError> {
        let horizon = if instance.vehicles.is_empty() {
            Some(0)
        } else {
            horizon_of(&instance)
        };
        self.calls.borrow_mut().push(instance);

        let completion = horizon.map_or(self.free_completion, |horizon| {
            horizon.min(self.free_completion)
        });

        if completion < self.threshold {
            return Ok(create_solution(&[], 0, 1));
        }

        let cost = 1000 + (self.free_completion - completion) * 10;
        Ok(create_solution(&[completion], cost, 0))
    }
}

/// Replays a fixed list of answers and records every instance it receives.
pub struct ScriptedOracle {
    answers: RefCell<VecDeque<Solution>>,
    pub calls: RefCell<Vec<ProblemInstance>>,
}

impl ScriptedOracle {
    pub fn new(answers: Vec<Solution>) -> Self {
        ScriptedOracle {
            answers: RefCell::new(answers.into()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl SolverOracle for ScriptedOracle {
    fn solve(
        &self,
        instance: ProblemInstance,
        _options: &SearchOptions,
    ) -> Result<Solution, OracleError> {
        self.calls.borrow_mut().push(instance);

        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .expect("ScriptedOracle: no answer left"))
    }
}
