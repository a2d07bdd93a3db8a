pub mod problem_instance;
pub mod search_options;
pub mod time_window;
pub mod vehicle;
