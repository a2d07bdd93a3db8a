pub mod origin;
pub mod route;
pub mod solution;
pub mod summary;
