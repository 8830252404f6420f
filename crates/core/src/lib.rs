//! Graph construction and route-tree solving for route-solver.

pub mod frontier;
pub mod graph;
pub mod solver;
pub mod traits;

pub use graph::RoomGraph;
pub use solver::DijkstraSolver;
