pub mod attempt;
pub mod backward_search;
pub mod dichotomy;
pub mod horizon;
