use route_graph_core::{ArcRecord, Graph, GraphError, Route};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: route-graph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all     Run all generators and benchmark each (default)");
        println!("  ring    Directed ring with forward chords (long cycles)");
        println!("  random  Sparse uniform random arcs");
        println!("  torus   Wrapping grid, arcs right and down (many short cycles)");
        println!();
        println!("Default vertex_count: 2000");
        println!("Set RUST_LOG=route_graph_core=debug for per-query counters.");
        return;
    }

    if vertex_count < 4 {
        eprintln!("vertex_count must be at least 4, got {}", vertex_count);
        return;
    }

    println!("route-graph-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "ring" => vec![("Ring with chords", gen_ring)],
        "random" => vec![("Sparse random", gen_random)],
        "torus" => vec![("Torus grid", gen_torus)],
        "all" => vec![
            ("Ring with chords", gen_ring as fn(usize) -> Graph),
            ("Sparse random", gen_random),
            ("Torus grid", gen_torus),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

/// Run `f` and return its result with the elapsed time in milliseconds.
fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let t = Instant::now();
    let result = f();
    (result, t.elapsed().as_secs_f64() * 1000.0)
}

fn describe(result: &Result<Route, GraphError>) -> String {
    match result {
        Ok(route) => format!("{} stops", route.len() - 1),
        Err(e) => e.to_string(),
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let (graph, gen_ms) = timed(|| generator(vertex_count));
    tracing::info!(
        generator = name,
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        "graph generated"
    );
    println!(
        "Generated in {:.1}ms — {} vertices, {} arcs",
        gen_ms,
        graph.vertex_count(),
        graph.arc_count()
    );

    let origin = key(0);
    let far = key(graph.vertex_count() - 1);

    println!();
    println!("{:<28} {:>24} {:>10}", "query", "result", "time");
    println!("{:-<28} {:->24} {:->10}", "", "", "");

    let (shortest, ms) = timed(|| graph.shortest_route(&origin, &far));
    println!("{:<28} {:>24} {:>8.2}ms", "shortest_route", describe(&shortest), ms);

    if let Ok(route) = &shortest {
        let (dist, ms) = timed(|| graph.distance(route));
        let shown = match dist {
            Ok(d) => format!("{:.1}", d),
            Err(e) => e.to_string(),
        };
        println!("{:<28} {:>24} {:>8.2}ms", "distance (shortest route)", shown, ms);
    }

    let (trip, ms) = timed(|| graph.shortest_round_trip(&origin));
    println!("{:<28} {:>24} {:>8.2}ms", "shortest_round_trip", describe(&trip), ms);

    for stops in [2, 4, 6] {
        let (trip, ms) = timed(|| graph.round_trip_max_stops(&origin, stops));
        let label = format!("round_trip_max_stops({})", stops);
        println!("{:<28} {:>24} {:>8.2}ms", label, describe(&trip), ms);
    }

    for stops in [2, 4, 6] {
        let target = key(stops as usize % graph.vertex_count());
        let (trip, ms) = timed(|| graph.trip_exact_stops(&origin, &target, stops));
        let label = format!("trip_exact_stops({})", stops);
        println!("{:<28} {:>24} {:>8.2}ms", label, describe(&trip), ms);
    }

    for bound in [20.0, 40.0, 60.0] {
        let (trips, ms) = timed(|| graph.round_trips_under_weight(&origin, bound));
        let shown = match trips {
            Ok(t) => format!("{} round trips", t.len()),
            Err(e) => e.to_string(),
        };
        let label = format!("round_trips_under_weight({})", bound);
        println!("{:<28} {:>24} {:>8.2}ms", label, shown, ms);
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — deterministic, weights in [MIN_WEIGHT, MIN_WEIGHT + WEIGHT_SPREAD)
// ---------------------------------------------------------------------------

const MIN_WEIGHT: u64 = 5;
const WEIGHT_SPREAD: u64 = 10;

/// Zero-padded keys so store order matches generation order.
fn key(i: usize) -> String {
    format!("v{:07}", i)
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn weight(&mut self) -> f64 {
        (MIN_WEIGHT + self.next(WEIGHT_SPREAD)) as f64
    }
}

/// Directed ring: each vertex points at its successor, and every third
/// vertex also gets a chord a few steps ahead.
fn gen_ring(vertex_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(vertex_count);
    let mut rng = FastRng::new(42);
    let n = vertex_count;

    graph.load_arcs((0..n).flat_map(|i| {
        let mut arcs = vec![ArcRecord::new(key(i), key((i + 1) % n), rng.weight())];
        if i % 3 == 0 {
            let hop = 2 + rng.next(5) as usize;
            arcs.push(ArcRecord::new(key(i), key((i + hop) % n), rng.weight()));
        }
        arcs
    }));
    graph
}

/// Sparse random digraph, about three arcs per vertex, plus a ring so the
/// origin is always on at least one cycle.
fn gen_random(vertex_count: usize) -> Graph {
    let mut graph = Graph::with_capacity(vertex_count);
    let mut rng = FastRng::new(54321);
    let n = vertex_count;

    for i in 0..n {
        graph.insert_vertex(key(i));
    }
    let mut arcs = Vec::with_capacity(n * 3);
    for i in 0..n {
        arcs.push(ArcRecord::new(key(i), key((i + 1) % n), rng.weight()));
    }
    for _ in 0..n * 2 {
        let from = rng.next(n as u64) as usize;
        let to = rng.next(n as u64) as usize;
        if from != to {
            arcs.push(ArcRecord::new(key(from), key(to), rng.weight()));
        }
    }
    graph.load_arcs(arcs);
    graph
}

/// Square torus: arcs to the right and downward neighbour, wrapping at the
/// edges. Rounds `vertex_count` down to a perfect square.
fn gen_torus(vertex_count: usize) -> Graph {
    let side = ((vertex_count as f64).sqrt() as usize).max(2);
    let mut graph = Graph::with_capacity(side * side);
    let mut rng = FastRng::new(99999);

    let mut arcs = Vec::with_capacity(side * side * 2);
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            let right = row * side + (col + 1) % side;
            let down = ((row + 1) % side) * side + col;
            arcs.push(ArcRecord::new(key(here), key(right), rng.weight()));
            arcs.push(ArcRecord::new(key(here), key(down), rng.weight()));
        }
    }
    graph.load_arcs(arcs);
    graph
}
