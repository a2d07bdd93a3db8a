pub mod asap;
pub mod error;
pub mod oracle;
pub mod pareto;
pub mod problem;
pub mod report;
pub mod schema;
pub mod search;
pub mod solution;

#[cfg(test)]
pub(crate) mod test_utils;
