use thiserror::Error;

/// Failures reported by the graph store, its queues, and the route queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The store holds no vertices at all.
    #[error("graph is empty")]
    EmptyGraph,

    /// A referenced vertex key is not in the store.
    #[error("vertex '{0}' not found")]
    VertexNotFound(String),

    /// Two consecutive vertices of an explicit route have no direct arc.
    #[error("NO SUCH ROUTE: no arc from '{from}' to '{to}'")]
    NoSuchRoute { from: String, to: String },

    /// The search space was exhausted without satisfying the query.
    #[error("no solution found")]
    NoSolution,

    /// Dequeue on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, GraphError>;
