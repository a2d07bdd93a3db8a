use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    error::ParetoError,
    oracle::solver_oracle::SolverOracle,
    pareto::pareto_reducer,
    problem::{problem_instance::ProblemInstance, search_options::SearchOptions},
    report::{
        frontier_reporter::{AsapOutput, ChartTarget, FrontierReporter, ReportMode},
        renderer::{ChartOptions, FrontierRenderer},
    },
    search::{backward_search::backward_search, dichotomy::dichotomy},
};

/// Input of [`solve_asap`].
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
#[serde(deny_unknown_fields, rename = "AsapRequest")]
pub struct AsapRequest {
    pub instance: ProblemInstance,

    /// Arguments passed to every solver call.
    #[serde(default)]
    pub cl_args: SearchOptions,

    /// Also run the backward search for a denser frontier.
    #[serde(default)]
    pub pareto_front_more_solution: bool,

    /// Where to draw the frontier, empty to skip the chart.
    #[serde(default)]
    pub pareto_plot_file: String,

    /// Return the whole frontier instead of the fastest solution.
    #[serde(default)]
    pub return_pareto_front: bool,

    /// Start the chart's cost axis at 0.
    #[serde(default)]
    pub full_cost_scale: bool,
}

impl AsapRequest {
    pub fn new(instance: ProblemInstance) -> Self {
        AsapRequest {
            instance,
            cl_args: SearchOptions::default(),
            pareto_front_more_solution: false,
            pareto_plot_file: String::new(),
            return_pareto_front: false,
            full_cost_scale: false,
        }
    }

    pub fn report_mode(&self) -> ReportMode {
        if self.return_pareto_front {
            ReportMode::Frontier
        } else {
            ReportMode::SingleBest
        }
    }
}

/// Solves the instance once without constraint, explores tighter horizons
/// from there and reduces everything found to a cost / completion time
/// frontier.
#[instrument(skip_all, level = "debug")]
pub fn solve_asap<O>(
    request: AsapRequest,
    oracle: &O,
    renderer: Option<&dyn FrontierRenderer>,
) -> Result<AsapOutput, ParetoError>
where
    O: SolverOracle + ?Sized,
{
    let options = &request.cl_args;

    let initial = oracle.solve(request.instance.clone(), options)?;
    if !initial.is_success() {
        return Err(ParetoError::SolverFailure {
            code: initial.code,
            message: initial.error.unwrap_or_default(),
        });
    }

    info!(
        "Initial solution: completion = {}, cost = {}, unassigned = {}",
        initial.completion_time(),
        initial.cost(),
        initial.summary.unassigned
    );

    let mut candidates = dichotomy(&request.instance, options, &initial, oracle)?;
    info!("Dichotomy found {} solutions", candidates.len());

    if request.pareto_front_more_solution {
        let more = backward_search(&request.instance, options, &initial, oracle)?;
        info!("Backward search found {} solutions", more.len());
        candidates.extend(more);
    }

    let frontier = pareto_reducer::reduce(candidates);
    if frontier.is_empty() {
        return Err(ParetoError::NoFeasibleSolution {
            unassigned: initial.summary.unassigned,
        });
    }

    info!(
        "Pareto front: {} solutions, completion from {} to {}",
        frontier.len(),
        frontier[0].completion_time(),
        frontier[frontier.len() - 1].completion_time()
    );

    let mut reporter = FrontierReporter::new(request.report_mode());
    if !request.pareto_plot_file.is_empty() {
        match renderer {
            Some(renderer) => {
                reporter = reporter.with_chart(ChartTarget {
                    renderer,
                    destination: PathBuf::from(&request.pareto_plot_file),
                    options: ChartOptions {
                        full_cost_scale: request.full_cost_scale,
                    },
                });
            }
            None => warn!(
                "No renderer available, skipping chart {}",
                request.pareto_plot_file
            ),
        }
    }

    reporter.report(frontier)
}
