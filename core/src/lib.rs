//! route-graph-core: Directed, edge-weighted graph store with route queries.
//!
//! A pure Rust library that keeps an ordered vertex directory with sorted
//! out-arcs and answers route questions over it: the distance of an explicit
//! route, bounded-stop round trips, exact-stop trips, shortest routes and
//! round trips, and every round trip under a weight bound.
//!
//! Queries borrow the store immutably and keep all traversal state to
//! themselves, so one store can serve any number of queries between edits.

mod error;
mod graph;
mod queue;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{ArcRecord, Edge, Graph, Vertex, VertexId};
pub use queue::{PathLength, Queue, QueueMode, Stack};
pub use traversal::{
    distance, round_trip_max_stops, round_trips_under_weight, shortest_round_trip,
    shortest_route, trip_exact_stops, Route,
};
