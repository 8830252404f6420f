//! Shared types and errors for route-solver.

pub mod error;
pub mod types;
