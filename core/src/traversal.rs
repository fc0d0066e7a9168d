use std::iter;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::queue::{PathLength, Queue, Stack};

/// A route: vertex keys from origin to terminal.
pub type Route = Vec<String>;

/// Slot of an expanded path node in a [`Trail`].
type TrailIdx = usize;

/// One partial path in an enumerating search.
///
/// Several path nodes may name the same store vertex at once; each carries
/// its own parent, hop level and accumulated weight.
#[derive(Debug, Clone, Copy)]
struct PathNode {
    vertex: VertexId,
    parent: Option<TrailIdx>,
    level: u32,
    path_length: f64,
}

impl PathNode {
    fn origin(vertex: VertexId) -> Self {
        Self {
            vertex,
            parent: None,
            level: 0,
            path_length: 0.0,
        }
    }
}

impl PathLength for PathNode {
    fn path_length(&self) -> f64 {
        self.path_length
    }
}

/// Arena of expanded path nodes. Children refer to their parent by slot,
/// so a path is never copied while it is being extended.
#[derive(Default)]
struct Trail {
    nodes: Vec<PathNode>,
}

impl Trail {
    fn push(&mut self, node: PathNode) -> TrailIdx {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn route(&self, graph: &Graph, terminal: PathNode) -> Route {
        let chain = iter::successors(Some(terminal), |node| {
            node.parent.map(|idx| self.nodes[idx])
        });
        collect_route(graph, chain.map(|node| node.vertex))
    }
}

/// Turn a terminal-to-root chain of vertices into a root-to-terminal route.
fn collect_route<I>(graph: &Graph, chain: I) -> Route
where
    I: IntoIterator<Item = VertexId>,
{
    let mut stack = Stack::new();
    for vertex in chain {
        stack.push(vertex);
    }
    let mut route = Vec::with_capacity(stack.len());
    while let Some(vertex) = stack.pop() {
        route.push(graph.key_of(vertex).to_string());
    }
    route
}

/// Work counters reported in each query's debug event.
#[derive(Debug, Default)]
struct SearchStats {
    expanded: usize,
    peak_queue: usize,
}

impl SearchStats {
    fn observe<T: PathLength>(&mut self, queue: &Queue<T>) {
        self.peak_queue = self.peak_queue.max(queue.len());
    }
}

fn ensure_populated(graph: &Graph) -> Result<()> {
    if graph.is_empty() {
        Err(GraphError::EmptyGraph)
    } else {
        Ok(())
    }
}

/// Total weight of an explicit route.
///
/// Every key must exist, and every consecutive pair must be joined by a
/// direct arc. Routes of zero or one vertex have distance 0.
pub fn distance<S: AsRef<str>>(graph: &Graph, route: &[S]) -> Result<f64> {
    let ids = route
        .iter()
        .map(|key| graph.resolve(key.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let mut total = 0.0;
    for pair in ids.windows(2) {
        let edge = graph
            .find_arc(pair[0], pair[1])
            .ok_or_else(|| GraphError::NoSuchRoute {
                from: graph.key_of(pair[0]).to_string(),
                to: graph.key_of(pair[1]).to_string(),
            })?;
        total += edge.weight;
    }
    Ok(total)
}

/// Level-ordered search over per-path copies.
///
/// Returns the first path node at level > 0 that satisfies `accept`.
/// Nodes at `max_level` are tested but not expanded.
fn level_search<F>(
    graph: &Graph,
    origin: VertexId,
    max_level: u32,
    stats: &mut SearchStats,
    accept: F,
) -> Option<Route>
where
    F: Fn(&PathNode) -> bool,
{
    let mut queue = Queue::fifo();
    let mut trail = Trail::default();
    queue.enqueue(PathNode::origin(origin));

    while let Ok(node) = queue.dequeue() {
        if node.level > 0 && accept(&node) {
            return Some(trail.route(graph, node));
        }
        if node.level >= max_level {
            continue;
        }

        stats.expanded += 1;
        let parent = trail.push(node);
        for edge in graph.out_arcs(node.vertex) {
            queue.enqueue(PathNode {
                vertex: edge.target,
                parent: Some(parent),
                level: node.level + 1,
                path_length: node.path_length + edge.weight,
            });
        }
        stats.observe(&queue);
    }
    None
}

/// Find a round trip from `start` back to itself using at most `max_stops` arcs.
///
/// This is a feasibility search: the first round trip met in level order is
/// returned, which is one with the fewest stops but not necessarily the
/// lightest. Ties at the same level go to the lower destination keys.
pub fn round_trip_max_stops(graph: &Graph, start: &str, max_stops: u32) -> Result<Route> {
    ensure_populated(graph)?;
    let origin = graph.resolve(start)?;

    let mut stats = SearchStats::default();
    let found = level_search(graph, origin, max_stops, &mut stats, |node| {
        node.vertex == origin
    });

    debug!(
        start,
        max_stops,
        expanded = stats.expanded,
        peak_queue = stats.peak_queue,
        found = found.is_some(),
        "round_trip_max_stops"
    );
    found.ok_or(GraphError::NoSolution)
}

/// Find a trip from `from` to `to` using exactly `stops` arcs.
///
/// Vertices may repeat. Like [`round_trip_max_stops`] this returns the first
/// trip found in level order. `stops == 0` never has a solution.
pub fn trip_exact_stops(graph: &Graph, from: &str, to: &str, stops: u32) -> Result<Route> {
    ensure_populated(graph)?;
    let origin = graph.resolve(from)?;
    let target = graph.resolve(to)?;

    let mut stats = SearchStats::default();
    let found = level_search(graph, origin, stops, &mut stats, |node| {
        node.level == stops && node.vertex == target
    });

    debug!(
        from,
        to,
        stops,
        expanded = stats.expanded,
        peak_queue = stats.peak_queue,
        found = found.is_some(),
        "trip_exact_stops"
    );
    found.ok_or(GraphError::NoSolution)
}

/// Best-known distance to one vertex during a relaxation search.
#[derive(Debug, Clone, Copy)]
struct Label {
    path_length: f64,
    parent: Option<VertexId>,
    processed: bool,
}

impl Label {
    const UNREACHED: Self = Self {
        path_length: f64::INFINITY,
        parent: None,
        processed: false,
    };
}

/// Walk parent links from `from` back to the search origin.
fn label_chain(labels: &[Label], from: VertexId) -> impl Iterator<Item = VertexId> + '_ {
    iter::successors(Some(from), move |&v| labels[v].parent)
}

/// Best-known arc back into the origin of a round-trip search.
#[derive(Debug, Clone, Copy)]
struct Closing {
    path_length: f64,
    via: VertexId,
}

/// Priority-queue entry: a vertex and its path length when it was queued.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    vertex: VertexId,
    path_length: f64,
    closes: bool,
}

impl PathLength for Candidate {
    fn path_length(&self) -> f64 {
        self.path_length
    }
}

#[derive(Debug, Clone, Copy)]
enum Goal {
    Reach(VertexId),
    ReturnTo(VertexId),
}

/// Label-correcting shortest-path search from `origin`.
///
/// Labels live in a per-call table indexed by vertex id. A vertex is
/// re-queued whenever a strictly shorter path to it is found; queue entries
/// superseded by a later improvement are skipped when dequeued. In
/// `ReturnTo` mode, arcs re-entering the origin update a separate closing
/// label so the origin itself keeps path length 0.
fn relaxation_search(
    graph: &Graph,
    origin: VertexId,
    goal: Goal,
    stats: &mut SearchStats,
) -> Option<Route> {
    let mut labels = vec![Label::UNREACHED; graph.vertex_count()];
    let mut closing: Option<Closing> = None;
    let mut queue = Queue::priority();

    labels[origin] = Label {
        path_length: 0.0,
        parent: None,
        processed: true,
    };
    queue.enqueue(Candidate {
        vertex: origin,
        path_length: 0.0,
        closes: false,
    });

    while let Ok(candidate) = queue.dequeue() {
        if candidate.closes {
            match closing {
                Some(best) if candidate.path_length <= best.path_length => {
                    let mut route = collect_route(graph, label_chain(&labels, best.via));
                    route.push(graph.key_of(origin).to_string());
                    return Some(route);
                }
                _ => continue,
            }
        }

        let current = labels[candidate.vertex];
        if candidate.path_length > current.path_length {
            continue;
        }
        if let Goal::Reach(target) = goal {
            if candidate.vertex == target {
                return Some(collect_route(graph, label_chain(&labels, target)));
            }
        }

        stats.expanded += 1;
        for edge in graph.out_arcs(candidate.vertex) {
            let path_length = current.path_length + edge.weight;

            if matches!(goal, Goal::ReturnTo(o) if o == edge.target) {
                let improves = closing.map_or(true, |best| path_length < best.path_length);
                if path_length > 0.0 && improves {
                    closing = Some(Closing {
                        path_length,
                        via: candidate.vertex,
                    });
                    queue.enqueue(Candidate {
                        vertex: origin,
                        path_length,
                        closes: true,
                    });
                }
                continue;
            }

            let dest = &mut labels[edge.target];
            if !dest.processed || path_length < dest.path_length {
                *dest = Label {
                    path_length,
                    parent: Some(candidate.vertex),
                    processed: true,
                };
                queue.enqueue(Candidate {
                    vertex: edge.target,
                    path_length,
                    closes: false,
                });
            }
        }
        stats.observe(&queue);
    }
    None
}

/// Lightest route from `from` to `to`.
///
/// Correct for non-negative weights only; negative arcs are accepted by the
/// store but make the result unspecified. `from == to` yields `[from]`.
pub fn shortest_route(graph: &Graph, from: &str, to: &str) -> Result<Route> {
    ensure_populated(graph)?;
    let origin = graph.resolve(from)?;
    let target = graph.resolve(to)?;

    let mut stats = SearchStats::default();
    let found = relaxation_search(graph, origin, Goal::Reach(target), &mut stats);

    debug!(
        from,
        to,
        expanded = stats.expanded,
        peak_queue = stats.peak_queue,
        found = found.is_some(),
        "shortest_route"
    );
    found.ok_or(GraphError::NoSolution)
}

/// Lightest round trip of positive weight from `from` back to itself.
///
/// The route starts and ends with `from`. Cycles of total weight 0 are not
/// round trips.
pub fn shortest_round_trip(graph: &Graph, from: &str) -> Result<Route> {
    ensure_populated(graph)?;
    let origin = graph.resolve(from)?;

    let mut stats = SearchStats::default();
    let found = relaxation_search(graph, origin, Goal::ReturnTo(origin), &mut stats);

    debug!(
        from,
        expanded = stats.expanded,
        peak_queue = stats.peak_queue,
        found = found.is_some(),
        "shortest_round_trip"
    );
    found.ok_or(GraphError::NoSolution)
}

/// Every round trip from `start` whose total weight is below `max_weight`.
///
/// Round trips may pass through `start` several times; each return to
/// `start` under the bound is reported. Results come in level order (fewest
/// stops first, then by destination key). Paths are abandoned as soon as
/// their weight reaches `max_weight`, which is the only thing bounding the
/// search: with zero-weight cycles it does not terminate.
pub fn round_trips_under_weight(
    graph: &Graph,
    start: &str,
    max_weight: f64,
) -> Result<Vec<Route>> {
    ensure_populated(graph)?;
    let origin = graph.resolve(start)?;

    let mut stats = SearchStats::default();
    let mut solutions = Vec::new();
    let mut queue = Queue::fifo();
    let mut trail = Trail::default();
    queue.enqueue(PathNode::origin(origin));

    while let Ok(node) = queue.dequeue() {
        if node.path_length >= max_weight {
            continue;
        }
        if node.path_length > 0.0 && node.vertex == origin {
            solutions.push(trail.route(graph, node));
        }

        stats.expanded += 1;
        let parent = trail.push(node);
        for edge in graph.out_arcs(node.vertex) {
            let path_length = node.path_length + edge.weight;
            if path_length < max_weight {
                queue.enqueue(PathNode {
                    vertex: edge.target,
                    parent: Some(parent),
                    level: node.level + 1,
                    path_length,
                });
            }
        }
        stats.observe(&queue);
    }

    debug!(
        start,
        max_weight,
        expanded = stats.expanded,
        peak_queue = stats.peak_queue,
        solutions = solutions.len(),
        "round_trips_under_weight"
    );
    Ok(solutions)
}

impl Graph {
    /// See [`distance`].
    pub fn distance<S: AsRef<str>>(&self, route: &[S]) -> Result<f64> {
        distance(self, route)
    }

    /// See [`round_trip_max_stops`].
    pub fn round_trip_max_stops(&self, start: &str, max_stops: u32) -> Result<Route> {
        round_trip_max_stops(self, start, max_stops)
    }

    /// See [`trip_exact_stops`].
    pub fn trip_exact_stops(&self, from: &str, to: &str, stops: u32) -> Result<Route> {
        trip_exact_stops(self, from, to, stops)
    }

    /// See [`shortest_route`].
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Route> {
        shortest_route(self, from, to)
    }

    /// See [`shortest_round_trip`].
    pub fn shortest_round_trip(&self, from: &str) -> Result<Route> {
        shortest_round_trip(self, from)
    }

    /// See [`round_trips_under_weight`].
    pub fn round_trips_under_weight(&self, start: &str, max_weight: f64) -> Result<Vec<Route>> {
        round_trips_under_weight(self, start, max_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ArcRecord;

    /// The five-town fixture: a,b,c,d,e with nine weighted arcs.
    fn make_towns() -> Graph {
        let mut g = Graph::new();
        for key in ["a", "b", "c", "d", "e"] {
            g.insert_vertex(key);
        }
        for (from, to, w) in [
            ("a", "b", 5.0),
            ("b", "c", 4.0),
            ("c", "d", 8.0),
            ("d", "c", 8.0),
            ("d", "e", 6.0),
            ("a", "d", 5.0),
            ("c", "e", 2.0),
            ("e", "b", 3.0),
            ("a", "e", 7.0),
        ] {
            g.insert_arc(from, to, w).unwrap();
        }
        g
    }

    fn make_chain(n: usize) -> Graph {
        let mut g = Graph::new();
        g.load_arcs((0..n - 1).map(|i| ArcRecord::new(format!("v{i}"), format!("v{}", i + 1), 1.0)));
        g
    }

    fn make_cycle(n: usize) -> Graph {
        let mut g = Graph::new();
        g.load_arcs((0..n).map(|i| ArcRecord::new(format!("v{i}"), format!("v{}", (i + 1) % n), 1.0)));
        g
    }

    fn route(keys: &[&str]) -> Route {
        keys.iter().map(|k| k.to_string()).collect()
    }

    // --- distance ---

    #[test]
    fn test_distance_fixture_routes() {
        let g = make_towns();
        assert_eq!(g.distance(&["a", "b", "c"]), Ok(9.0));
        assert_eq!(g.distance(&["a", "d"]), Ok(5.0));
        assert_eq!(g.distance(&["a", "d", "c"]), Ok(13.0));
        assert_eq!(g.distance(&["a", "e", "b", "c", "d"]), Ok(22.0));
    }

    #[test]
    fn test_distance_no_such_route() {
        let g = make_towns();
        let err = g.distance(&["a", "e", "d"]).unwrap_err();
        assert_eq!(
            err,
            GraphError::NoSuchRoute {
                from: "e".to_string(),
                to: "d".to_string()
            }
        );
        assert!(err.to_string().starts_with("NO SUCH ROUTE"));
    }

    #[test]
    fn test_distance_trivial_routes() {
        let g = make_towns();
        let empty: [&str; 0] = [];
        assert_eq!(g.distance(&empty), Ok(0.0));
        assert_eq!(g.distance(&["c"]), Ok(0.0));
    }

    #[test]
    fn test_distance_unknown_vertex_wins_over_missing_arc() {
        let g = make_towns();
        assert_eq!(
            g.distance(&["a", "e", "d", "x"]),
            Err(GraphError::VertexNotFound("x".to_string()))
        );
    }

    // --- round_trip_max_stops ---

    #[test]
    fn test_round_trip_max_stops_fixture() {
        let g = make_towns();
        assert_eq!(g.round_trip_max_stops("c", 3), Ok(route(&["c", "d", "c"])));
    }

    #[test]
    fn test_round_trip_max_stops_too_few_stops() {
        let g = make_towns();
        // Every cycle through c needs at least two arcs
        assert_eq!(g.round_trip_max_stops("c", 1), Err(GraphError::NoSolution));
        assert_eq!(g.round_trip_max_stops("c", 0), Err(GraphError::NoSolution));
    }

    #[test]
    fn test_round_trip_max_stops_no_cycle() {
        let g = make_chain(4);
        assert_eq!(g.round_trip_max_stops("v0", 10), Err(GraphError::NoSolution));
    }

    #[test]
    fn test_round_trip_max_stops_cycle_length() {
        let g = make_cycle(5);
        assert_eq!(g.round_trip_max_stops("v0", 4), Err(GraphError::NoSolution));
        let trip = g.round_trip_max_stops("v0", 5).unwrap();
        assert_eq!(trip, route(&["v0", "v1", "v2", "v3", "v4", "v0"]));
    }

    #[test]
    fn test_round_trip_max_stops_self_loop() {
        let mut g = Graph::new();
        g.load_arcs(vec![ArcRecord::new("a", "a", 1.0)]);
        assert_eq!(g.round_trip_max_stops("a", 1), Ok(route(&["a", "a"])));
    }

    #[test]
    fn test_round_trip_max_stops_errors() {
        let empty = Graph::new();
        assert_eq!(empty.round_trip_max_stops("a", 3), Err(GraphError::EmptyGraph));
        let g = make_towns();
        assert_eq!(
            g.round_trip_max_stops("z", 3),
            Err(GraphError::VertexNotFound("z".to_string()))
        );
    }

    // --- trip_exact_stops ---

    #[test]
    fn test_trip_exact_stops_fixture() {
        let g = make_towns();
        let trip = g.trip_exact_stops("a", "c", 4).unwrap();
        assert_eq!(trip, route(&["a", "b", "c", "d", "c"]));
        assert_eq!(trip.len(), 5);
    }

    #[test]
    fn test_trip_exact_stops_requires_exact_level() {
        let g = make_towns();
        // a -> b -> c is two stops; one stop cannot reach c
        assert_eq!(g.trip_exact_stops("a", "c", 1), Err(GraphError::NoSolution));
        assert_eq!(g.trip_exact_stops("a", "c", 2), Ok(route(&["a", "b", "c"])));
    }

    #[test]
    fn test_trip_exact_stops_zero() {
        let g = make_towns();
        assert_eq!(g.trip_exact_stops("a", "a", 0), Err(GraphError::NoSolution));
    }

    #[test]
    fn test_trip_exact_stops_unknown_endpoints() {
        let g = make_towns();
        assert_eq!(
            g.trip_exact_stops("a", "z", 2),
            Err(GraphError::VertexNotFound("z".to_string()))
        );
        assert_eq!(
            g.trip_exact_stops("z", "a", 2),
            Err(GraphError::VertexNotFound("z".to_string()))
        );
        assert_eq!(
            Graph::new().trip_exact_stops("a", "b", 2),
            Err(GraphError::EmptyGraph)
        );
    }

    // --- shortest_route ---

    #[test]
    fn test_shortest_route_fixture() {
        let g = make_towns();
        assert_eq!(g.shortest_route("a", "c"), Ok(route(&["a", "b", "c"])));
        assert_eq!(g.shortest_route("b", "b"), Ok(route(&["b"])));

        let long = g.shortest_route("d", "b").unwrap();
        assert_eq!(long, route(&["d", "e", "b"]));
        assert_eq!(g.distance(&long), Ok(9.0));
    }

    #[test]
    fn test_shortest_route_prefers_light_over_short() {
        let mut g = Graph::new();
        g.load_arcs(vec![
            ArcRecord::new("s", "t", 10.0),
            ArcRecord::new("s", "m", 1.0),
            ArcRecord::new("m", "n", 1.0),
            ArcRecord::new("n", "t", 1.0),
        ]);
        assert_eq!(g.shortest_route("s", "t"), Ok(route(&["s", "m", "n", "t"])));
    }

    #[test]
    fn test_shortest_route_improves_processed_vertex() {
        let mut g = Graph::new();
        // x is queued via the heavy arc first and later improved through y
        g.load_arcs(vec![
            ArcRecord::new("s", "x", 9.0),
            ArcRecord::new("s", "y", 1.0),
            ArcRecord::new("y", "x", 1.0),
            ArcRecord::new("x", "t", 1.0),
        ]);
        assert_eq!(g.shortest_route("s", "t"), Ok(route(&["s", "y", "x", "t"])));
    }

    #[test]
    fn test_shortest_route_unreachable() {
        let g = make_chain(3);
        assert_eq!(g.shortest_route("v2", "v0"), Err(GraphError::NoSolution));
    }

    #[test]
    fn test_shortest_route_errors() {
        assert_eq!(Graph::new().shortest_route("a", "b"), Err(GraphError::EmptyGraph));
        let g = make_towns();
        assert_eq!(
            g.shortest_route("a", "q"),
            Err(GraphError::VertexNotFound("q".to_string()))
        );
    }

    #[test]
    fn test_shortest_route_leaves_store_reusable() {
        let g = make_towns();
        let first = g.shortest_route("a", "c").unwrap();
        let _ = g.shortest_round_trip("c").unwrap();
        assert_eq!(g.shortest_route("a", "c").unwrap(), first);
    }

    // --- shortest_round_trip ---

    #[test]
    fn test_shortest_round_trip_fixture() {
        let g = make_towns();
        let trip = g.shortest_round_trip("c").unwrap();
        assert_eq!(trip, route(&["c", "e", "b", "c"]));
        assert_eq!(g.distance(&trip), Ok(9.0));

        assert_eq!(g.shortest_round_trip("b"), Ok(route(&["b", "c", "e", "b"])));
    }

    #[test]
    fn test_shortest_round_trip_none() {
        let g = make_towns();
        // Nothing points back into a
        assert_eq!(g.shortest_round_trip("a"), Err(GraphError::NoSolution));
    }

    #[test]
    fn test_shortest_round_trip_self_loop() {
        let mut g = Graph::new();
        g.load_arcs(vec![
            ArcRecord::new("a", "a", 4.0),
            ArcRecord::new("a", "b", 1.0),
            ArcRecord::new("b", "a", 1.0),
        ]);
        assert_eq!(g.shortest_round_trip("a"), Ok(route(&["a", "b", "a"])));
    }

    #[test]
    fn test_shortest_round_trip_skips_zero_weight_cycle() {
        let mut g = Graph::new();
        g.load_arcs(vec![
            ArcRecord::new("a", "b", 0.0),
            ArcRecord::new("b", "a", 0.0),
            ArcRecord::new("a", "c", 2.0),
            ArcRecord::new("c", "a", 3.0),
        ]);
        assert_eq!(g.shortest_round_trip("a"), Ok(route(&["a", "c", "a"])));
    }

    // --- round_trips_under_weight ---

    #[test]
    fn test_round_trips_under_weight_fixture() {
        let g = make_towns();
        let trips = g.round_trips_under_weight("c", 30.0).unwrap();
        let expected = vec![
            route(&["c", "d", "c"]),
            route(&["c", "e", "b", "c"]),
            route(&["c", "d", "e", "b", "c"]),
            route(&["c", "d", "c", "e", "b", "c"]),
            route(&["c", "e", "b", "c", "d", "c"]),
            route(&["c", "e", "b", "c", "e", "b", "c"]),
            route(&["c", "e", "b", "c", "e", "b", "c", "e", "b", "c"]),
        ];
        assert_eq!(trips, expected);
        for trip in &trips {
            assert!(g.distance(trip).unwrap() < 30.0);
        }
    }

    #[test]
    fn test_round_trips_under_weight_bound_is_strict() {
        let g = make_towns();
        // c-e-b-c weighs exactly 9
        assert!(g.round_trips_under_weight("c", 9.0).unwrap().is_empty());
        assert_eq!(
            g.round_trips_under_weight("c", 9.5),
            Ok(vec![route(&["c", "e", "b", "c"])])
        );
    }

    #[test]
    fn test_round_trips_under_weight_empty_is_ok() {
        let g = make_towns();
        assert_eq!(g.round_trips_under_weight("a", 20.0), Ok(Vec::new()));
        assert_eq!(g.round_trips_under_weight("c", 0.0), Ok(Vec::new()));
    }

    #[test]
    fn test_round_trips_under_weight_errors() {
        assert_eq!(
            Graph::new().round_trips_under_weight("a", 10.0),
            Err(GraphError::EmptyGraph)
        );
        let g = make_towns();
        assert_eq!(
            g.round_trips_under_weight("q", 10.0),
            Err(GraphError::VertexNotFound("q".to_string()))
        );
    }
}
