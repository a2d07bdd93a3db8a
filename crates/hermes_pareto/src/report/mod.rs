pub mod frontier_reporter;
pub mod renderer;
pub mod svg_renderer;
