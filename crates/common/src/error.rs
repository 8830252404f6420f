use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested traversal start has no adjacency entry, so the solver
    /// has nowhere to grow the tree from.
    #[error("start room {0} has no entry in the graph")]
    StartRoomNotFound(String),
}
