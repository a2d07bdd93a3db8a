use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    problem::time_window::Time,
    solution::{origin::Origin, solution::Solution, summary::Cost},
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write chart {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to format chart: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("No point to render")]
    Empty,
}

/// One frontier solution on the completion time / cost plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrontierPoint {
    pub completion: Time,
    pub cost: Cost,
    pub origin: Origin,
}

impl FrontierPoint {
    /// `None` for a solution no search procedure tagged.
    pub fn from_solution(solution: &Solution) -> Option<Self> {
        Some(FrontierPoint {
            completion: solution.completion_time(),
            cost: solution.cost(),
            origin: solution.origin?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    /// Start the cost axis at 0 instead of fitting it to the points.
    pub full_cost_scale: bool,
}

impl ChartOptions {
    /// Cost axis range: `[0, 1.05 * max]` with a full scale, the observed
    /// range otherwise.
    pub fn cost_range(&self, points: &[FrontierPoint]) -> Option<(f64, f64)> {
        let max = points.iter().map(|point| point.cost).max()? as f64;

        if self.full_cost_scale {
            return Some((0.0, max * 1.05));
        }

        let min = points.iter().map(|point| point.cost).min()? as f64;
        Some((min, max))
    }
}

/// Draws a frontier to a file.
pub trait FrontierRenderer {
    fn render(
        &self,
        points: &[FrontierPoint],
        destination: &Path,
        options: &ChartOptions,
    ) -> Result<(), RenderError>;
}
