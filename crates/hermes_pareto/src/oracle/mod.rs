pub mod command_oracle;
pub mod solver_oracle;
