use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::ParetoError, solution::solution::Solution};

use super::renderer::{ChartOptions, FrontierPoint, FrontierRenderer};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// Every frontier solution.
    Frontier,
    /// Only the solution with the smallest completion time.
    SingleBest,
}

/// What the caller gets back: one solution or the whole frontier.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AsapOutput {
    Single(Box<Solution>),
    Frontier(Vec<Solution>),
}

pub struct ChartTarget<'a> {
    pub renderer: &'a dyn FrontierRenderer,
    pub destination: PathBuf,
    pub options: ChartOptions,
}

pub struct FrontierReporter<'a> {
    mode: ReportMode,
    chart: Option<ChartTarget<'a>>,
}

impl<'a> FrontierReporter<'a> {
    pub fn new(mode: ReportMode) -> Self {
        FrontierReporter { mode, chart: None }
    }

    pub fn with_chart(mut self, chart: ChartTarget<'a>) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Renders the chart if one is configured, then strips the bookkeeping
    /// fields from the solutions handed back.
    pub fn report(&self, frontier: Vec<Solution>) -> Result<AsapOutput, ParetoError> {
        if let Some(chart) = &self.chart {
            let points: Vec<FrontierPoint> = frontier
                .iter()
                .filter_map(FrontierPoint::from_solution)
                .collect();

            if points.len() < frontier.len() {
                warn!(
                    "FrontierReporter: {} solutions without origin left out of the chart",
                    frontier.len() - points.len()
                );
            }

            chart
                .renderer
                .render(&points, &chart.destination, &chart.options)?;
            info!("Pareto front chart written to {}", chart.destination.display());
        }

        match self.mode {
            ReportMode::Frontier => Ok(AsapOutput::Frontier(
                frontier
                    .into_iter()
                    .map(|mut solution| {
                        solution.origin = None;
                        solution
                    })
                    .collect(),
            )),
            ReportMode::SingleBest => {
                let mut best = frontier
                    .into_iter()
                    .next()
                    .ok_or(ParetoError::EmptyFrontier)?;
                best.origin = None;
                best.summary.computing_times = None;

                Ok(AsapOutput::Single(Box::new(best)))
            }
        }
    }
}
