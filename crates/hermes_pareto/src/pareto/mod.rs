pub mod pareto_reducer;
