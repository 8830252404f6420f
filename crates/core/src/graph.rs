use std::collections::HashMap;
use std::hash::Hash;

use common::types::Edge;

/// One directed adjacency entry: a room reachable through a single corridor,
/// together with that corridor's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<N> {
    pub room: N,
    pub distance: f64,
    pub probability: f64,
}

/// Adjacency structure over the rooms of a building.
///
/// Every room that appears in the input edge list, on either side, owns an
/// entry mapping it to the neighbors reachable through one corridor, in the
/// order the corridors were supplied. The structure is built once from an
/// edge list and read-only afterwards; the traversal layer never mutates it.
#[derive(Debug, Clone)]
pub struct RoomGraph<N> {
    adjacency: HashMap<N, Vec<Neighbor<N>>>,
}

impl<N: Clone + Eq + Hash> RoomGraph<N> {
    /// Builds the adjacency structure from a flat list of undirected corridors.
    ///
    /// Each input edge `(a, b, distance, probability)` is materialized as two
    /// directed entries, `a -> b` and `b -> a`, both carrying the same
    /// attributes. Rooms are created lazily on first appearance; no input
    /// validation is performed. Duplicate edges produce parallel entries and a
    /// self-loop produces two entries on the same room, both visible to the
    /// traversal, which settles each room through whichever entry carries the
    /// winning key.
    ///
    /// # Arguments
    /// * `edges` - Undirected corridor list in supply order.
    ///
    /// # Returns
    /// The populated adjacency structure. An empty edge list yields an empty
    /// graph with no rooms.
    pub fn from_edges(edges: &[Edge<N>]) -> Self {
        let mut adjacency: HashMap<N, Vec<Neighbor<N>>> = HashMap::new();

        for (a, b, distance, probability) in edges {
            adjacency.entry(a.clone()).or_default().push(Neighbor {
                room: b.clone(),
                distance: *distance,
                probability: *probability,
            });
            adjacency.entry(b.clone()).or_default().push(Neighbor {
                room: a.clone(),
                distance: *distance,
                probability: *probability,
            });
        }

        Self { adjacency }
    }

    /// Directed adjacency entries of `room` in corridor-supply order, or
    /// `None` for a room the edge list never mentioned.
    pub fn neighbors(&self, room: &N) -> Option<&[Neighbor<N>]> {
        self.adjacency.get(room).map(Vec::as_slice)
    }

    /// Whether `room` appeared anywhere in the input edge list.
    pub fn contains(&self, room: &N) -> bool {
        self.adjacency.contains_key(room)
    }

    /// Number of distinct rooms.
    pub fn num_rooms(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed adjacency entries, twice the input edge count.
    pub fn num_entries(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Iterator over the rooms, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_materializes_both_directions() {
        let graph = RoomGraph::from_edges(&[("Hall", "Lab", 2.0, 0.4)]);

        assert_eq!(
            graph.neighbors(&"Hall"),
            Some(
                &[Neighbor {
                    room: "Lab",
                    distance: 2.0,
                    probability: 0.4,
                }][..]
            )
        );
        assert_eq!(
            graph.neighbors(&"Lab"),
            Some(
                &[Neighbor {
                    room: "Hall",
                    distance: 2.0,
                    probability: 0.4,
                }][..]
            )
        );
    }

    #[test]
    fn neighbor_order_follows_corridor_supply_order() {
        let graph = RoomGraph::from_edges(&[
            ("Hall", "Lab", 2.0, 0.4),
            ("Hall", "Ward", 1.0, 0.9),
            ("Hall", "Office", 3.0, 0.2),
        ]);

        let entries = graph.neighbors(&"Hall").expect("room Hall exists");
        let rooms: Vec<&str> = entries.iter().map(|n| n.room).collect();
        assert_eq!(rooms, vec!["Lab", "Ward", "Office"]);
    }

    #[test]
    fn rooms_are_created_on_first_appearance() {
        let graph = RoomGraph::from_edges(&[("A", "B", 1.0, 0.5), ("B", "C", 1.0, 0.5)]);

        assert_eq!(graph.num_rooms(), 3);
        assert!(graph.contains(&"A"));
        assert!(graph.contains(&"C"));
        assert!(!graph.contains(&"D"));

        let mut rooms: Vec<&str> = graph.rooms().copied().collect();
        rooms.sort_unstable();
        assert_eq!(rooms, vec!["A", "B", "C"]);
    }

    #[test]
    fn parallel_edges_produce_parallel_entries() {
        let graph = RoomGraph::from_edges(&[("A", "B", 5.0, 0.1), ("A", "B", 1.0, 0.9)]);

        let entries = graph.neighbors(&"A").expect("room A exists");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].distance, 5.0);
        assert_eq!(entries[1].distance, 1.0);
    }

    #[test]
    fn self_loop_produces_two_entries_on_the_same_room() {
        let graph = RoomGraph::from_edges(&[("A", "A", 1.0, 0.9)]);

        assert_eq!(graph.num_rooms(), 1);
        let entries = graph.neighbors(&"A").expect("room A exists");
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|n| n.room == "A"));
    }

    #[test]
    fn entry_count_is_twice_the_edge_count() {
        let graph = RoomGraph::from_edges(&[
            ("A", "B", 1.0, 0.5),
            ("B", "C", 2.0, 0.3),
            ("C", "A", 3.0, 0.2),
        ]);

        assert_eq!(graph.num_entries(), 6);
    }

    #[test]
    fn empty_edge_list_yields_empty_graph() {
        let graph: RoomGraph<&str> = RoomGraph::from_edges(&[]);

        assert_eq!(graph.num_rooms(), 0);
        assert_eq!(graph.num_entries(), 0);
        assert_eq!(graph.neighbors(&"A"), None);
    }
}
