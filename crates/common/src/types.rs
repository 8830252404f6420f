use serde::Serialize;

/// Type alias for a single input edge: (room_a, room_b, distance, probability).
///
/// Edges are undirected; the graph builder materializes each one as two
/// directed adjacency entries. `distance` is a non-negative walking cost,
/// `probability` an arbitrary real-valued traversal weight (domain usage keeps
/// it in [0, 1], the algorithm does not require that).
pub type Edge<N> = (N, N, f64, f64);

/// Returns the conventional traversal start for an edge list: the first room
/// mentioned in it, or `None` for an empty list.
pub fn first_room<N>(edges: &[Edge<N>]) -> Option<&N> {
    edges.first().map(|(a, _, _, _)| a)
}

/// One finalized edge of the output route tree.
///
/// `probability_sum` and `total_distance` are accumulated over the whole tree
/// path from the start room to `to`, not over the single connecting corridor.
/// `from` is `None` only for the start room's own record, which the solver
/// strips before returning; every record a caller sees carries `Some`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge<N> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<N>,
    pub to: N,
    pub probability_sum: f64,
    pub total_distance: f64,
}
