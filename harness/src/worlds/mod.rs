//! World implementations for the harness runner.

pub mod chain;
pub mod points;
pub mod tunnel_grid;
