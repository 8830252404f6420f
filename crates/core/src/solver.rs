use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::frontier::{FrontierEntry, FrontierKey};
use super::graph::RoomGraph;
use super::traits::TreeSolver;
use common::{error::Error, types::TreeEdge};

/// Solver growing a probability-weighted route tree from a start room.
///
/// Despite its spanning-tree shape, the output is not a minimum spanning
/// tree: the frontier is keyed on cumulative distance from the start room,
/// not on individual corridor weights, so the construction is Dijkstra's
/// single-source shortest-path tree. Rooms unreachable from the start are
/// silently absent from the output.
pub struct DijkstraSolver;

impl TreeSolver for DijkstraSolver {
    /// Builds the route tree rooted at `start` with a composite frontier key.
    ///
    /// Frontier entries order by `(total_distance, neg_probability)`, so a
    /// shorter cumulative walk always wins and an exact distance tie falls to
    /// the larger accumulated probability sum. The first extraction of a room
    /// settles it; later entries for the same room are stale and discarded
    /// unexamined. Entries whose keys tie exactly resolve to the earlier
    /// push, which makes the output deterministic for a given edge list.
    ///
    /// # Arguments
    /// * `graph` - Adjacency structure built from the corridor list.
    /// * `start` - Room to grow the tree from.
    ///
    /// # Returns
    /// One record per reachable room in settle order, each carrying its
    /// predecessor and the accumulated pair. The start room's own record is
    /// removed before returning.
    ///
    /// # Errors
    /// Returns `Error::StartRoomNotFound` if `start` has no adjacency entry.
    #[tracing::instrument(skip(self, graph), fields(rooms = graph.num_rooms()))]
    fn shortest_path_tree<N>(
        &self,
        graph: &RoomGraph<N>,
        start: &N,
    ) -> Result<Vec<TreeEdge<N>>, Error>
    where
        N: Clone + Eq + Hash + Debug,
    {
        if !graph.contains(start) {
            return Err(Error::StartRoomNotFound(format!("{start:?}")));
        }

        let mut visited: HashSet<N> = HashSet::new();
        let mut tree: Vec<TreeEdge<N>> = Vec::new();
        let mut frontier: BinaryHeap<Reverse<FrontierEntry<N>>> = BinaryHeap::new();
        let mut seq = 0u64;

        frontier.push(Reverse(FrontierEntry {
            key: FrontierKey::START,
            seq,
            room: start.clone(),
            from: None,
        }));

        while let Some(Reverse(entry)) = frontier.pop() {
            // A room can hold several outstanding frontier entries, one per
            // candidate path; only the first extraction settles it.
            if visited.contains(&entry.room) {
                continue;
            }

            let FrontierEntry { key, room, from, .. } = entry;
            visited.insert(room.clone());

            tree.push(TreeEdge {
                from,
                to: room.clone(),
                probability_sum: key.probability_sum(),
                total_distance: key.total_distance,
            });

            // The builder records both endpoints of every corridor, so a
            // settled room always has an adjacency entry.
            let Some(neighbors) = graph.neighbors(&room) else {
                continue;
            };
            for next in neighbors {
                if !visited.contains(&next.room) {
                    seq += 1;
                    frontier.push(Reverse(FrontierEntry {
                        key: key.walk(next.distance, next.probability),
                        seq,
                        room: next.room.clone(),
                        from: Some(room.clone()),
                    }));
                }
            }
        }

        debug!(settled = visited.len(), "route tree complete");

        // The leading record is the start room itself, (None, start, 0, 0);
        // callers receive only real tree edges.
        Ok(tree.split_off(1))
    }
}
