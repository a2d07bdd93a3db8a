use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Args;
use comfy_table::Table;
use hermes_pareto::{
    asap::{AsapRequest, solve_asap},
    oracle::command_oracle::{CommandOracle, DEFAULT_SOLVER_PROGRAM},
    report::{frontier_reporter::AsapOutput, svg_renderer::SvgRenderer},
    solution::solution::Solution,
};
use tracing::info;

#[derive(Args)]
pub struct AsapArgs {
    /// Request file: instance, solver arguments and frontier options
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Where to write the result, stdout when absent
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,

    /// Solver executable, reading the instance on stdin
    #[arg(long, default_value = DEFAULT_SOLVER_PROGRAM)]
    solver: PathBuf,

    /// Return the whole frontier
    #[arg(long)]
    front: bool,

    /// Run the backward search as well
    #[arg(long)]
    more: bool,

    /// Draw the frontier to this SVG file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Start the chart's cost axis at 0
    #[arg(long)]
    full_cost_scale: bool,
}

fn frontier_table(solutions: &[Solution]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Completion time", "Cost", "Routes"]);

    for solution in solutions {
        table.add_row(vec![
            solution.completion_time().to_string(),
            solution.cost().to_string(),
            solution.routes.len().to_string(),
        ]);
    }

    table
}

pub fn run(args: AsapArgs) -> anyhow::Result<()> {
    info!("Solving {:?} with {:?}", args.input, args.solver);

    let f = File::open(&args.input)?;
    let mut request: AsapRequest = serde_json::from_reader(BufReader::new(f))?;

    request.return_pareto_front |= args.front;
    request.pareto_front_more_solution |= args.more;
    request.full_cost_scale |= args.full_cost_scale;
    if let Some(plot) = &args.plot {
        request.pareto_plot_file = plot.to_string_lossy().into_owned();
    }

    let oracle = CommandOracle::new(args.solver);
    let output = solve_asap(request, &oracle, Some(&SvgRenderer))?;

    match args.out {
        Some(out) => {
            let file = File::create(&out)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &output)?;
            writer.flush()?;

            let solutions = match &output {
                AsapOutput::Single(solution) => std::slice::from_ref(&**solution),
                AsapOutput::Frontier(solutions) => solutions.as_slice(),
            };
            println!("{}", frontier_table(solutions));
            info!("Result written to {:?}", out);
        }
        None => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
