use std::fmt::Debug;
use std::hash::Hash;

use super::graph::RoomGraph;
use common::{error::Error, types::TreeEdge};

/// Trait for solvers that grow a route tree outward from a start room.
pub trait TreeSolver {
    /// Builds the route tree rooted at `start`, one record per reachable room
    /// in settle order.
    ///
    /// Returns `Ok(edges)` with the start room's own record already removed,
    /// or `Err(e)` if `start` has no entry in the graph.
    fn shortest_path_tree<N>(
        &self,
        graph: &RoomGraph<N>,
        start: &N,
    ) -> Result<Vec<TreeEdge<N>>, Error>
    where
        N: Clone + Eq + Hash + Debug;
}
