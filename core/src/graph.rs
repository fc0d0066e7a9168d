use std::cmp::Ordering;

use crate::error::{GraphError, Result};

/// Internal vertex identifier: index into the store's vertex table.
///
/// Ids are stable while a vertex lives. Deleting a vertex moves the last
/// vertex into the freed slot, so ids must not be cached across a delete.
pub type VertexId = usize;

/// A directed, weighted arc owned by its source vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: VertexId,
    pub weight: f64,
}

/// A vertex: its key, its out-arcs in ascending destination-key order,
/// and its degree counters.
#[derive(Debug, Clone)]
pub struct Vertex {
    key: String,
    arcs: Vec<Edge>,
    in_degree: usize,
    out_degree: usize,
}

impl Vertex {
    fn new(key: String) -> Self {
        Self {
            key,
            arcs: Vec::new(),
            in_degree: 0,
            out_degree: 0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Out-arcs, sorted by destination key.
    pub fn arcs(&self) -> &[Edge] {
        &self.arcs
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    fn is_isolated(&self) -> bool {
        self.in_degree == 0 && self.out_degree == 0
    }
}

/// One arc in a bulk load: `from -> to` with `weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl ArcRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// In-memory directed graph with an ordered vertex directory.
///
/// `order` lists vertex ids in ascending key order. Lookups walk it
/// linearly and stop as soon as a greater key is seen. Arcs reference
/// their destination by id; the store never holds traversal scratch state.
pub struct Graph {
    vertices: Vec<Vertex>,
    order: Vec<VertexId>,
    arc_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            order: Vec::new(),
            arc_count: 0,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            order: Vec::with_capacity(vertex_count),
            arc_count: 0,
        }
    }

    /// Ordered scan of the vertex directory.
    ///
    /// `Ok(pos)` is the position of `key` in `order`; `Err(pos)` is where
    /// it would be inserted.
    fn scan(&self, key: &str) -> std::result::Result<usize, usize> {
        for (pos, &id) in self.order.iter().enumerate() {
            match self.vertices[id].key.as_str().cmp(key) {
                Ordering::Less => continue,
                Ordering::Equal => return Ok(pos),
                Ordering::Greater => return Err(pos),
            }
        }
        Err(self.order.len())
    }

    /// Insert a vertex in key order.
    ///
    /// Returns false, leaving the store untouched, if the key already exists.
    pub fn insert_vertex(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        match self.scan(&key) {
            Ok(_) => false,
            Err(pos) => {
                let id = self.vertices.len();
                self.vertices.push(Vertex::new(key));
                self.order.insert(pos, id);
                true
            }
        }
    }

    /// Remove a vertex whose in- and out-degree are both zero.
    ///
    /// Absent keys and vertices that still have arcs are left alone;
    /// the return value says whether anything was removed.
    pub fn delete_vertex(&mut self, key: &str) -> bool {
        let pos = match self.scan(key) {
            Ok(pos) => pos,
            Err(_) => return false,
        };
        let id = self.order[pos];
        if !self.vertices[id].is_isolated() {
            return false;
        }

        self.order.remove(pos);
        let last = self.vertices.len() - 1;
        self.vertices.swap_remove(id);

        // The old last vertex now lives at `id`; repoint everything at it.
        if id != last {
            for vertex in &mut self.vertices {
                for edge in &mut vertex.arcs {
                    if edge.target == last {
                        edge.target = id;
                    }
                }
            }
            for slot in &mut self.order {
                if *slot == last {
                    *slot = id;
                }
            }
        }
        true
    }

    /// Add a directed arc between two existing vertices.
    ///
    /// The arc is placed before any existing arc whose destination key is
    /// greater than or equal to `to`, so the newest of several parallel
    /// arcs is found first.
    pub fn insert_arc(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;
        self.link(from_id, to_id, weight);
        Ok(())
    }

    fn link(&mut self, from: VertexId, to: VertexId, weight: f64) {
        let to_key = self.vertices[to].key.as_str();
        let pos = self.vertices[from]
            .arcs
            .iter()
            .position(|e| self.vertices[e.target].key.as_str() >= to_key)
            .unwrap_or(self.vertices[from].arcs.len());

        self.vertices[from]
            .arcs
            .insert(pos, Edge { target: to, weight });
        self.vertices[from].out_degree += 1;
        self.vertices[to].in_degree += 1;
        self.arc_count += 1;
    }

    /// Bulk load arcs, creating missing endpoint vertices on the way.
    pub fn load_arcs<I>(&mut self, arcs: I)
    where
        I: IntoIterator<Item = ArcRecord>,
    {
        for ArcRecord { from, to, weight } in arcs {
            let from_id = self.ensure_vertex(from);
            let to_id = self.ensure_vertex(to);
            self.link(from_id, to_id, weight);
        }
    }

    fn ensure_vertex(&mut self, key: String) -> VertexId {
        match self.scan(&key) {
            Ok(pos) => self.order[pos],
            Err(pos) => {
                let id = self.vertices.len();
                self.vertices.push(Vertex::new(key));
                self.order.insert(pos, id);
                id
            }
        }
    }

    /// Look up a vertex id by key.
    pub fn find(&self, key: &str) -> Option<VertexId> {
        self.scan(key).ok().map(|pos| self.order[pos])
    }

    /// Like [`Graph::find`], but reports a missing key as an error.
    pub fn resolve(&self, key: &str) -> Result<VertexId> {
        self.find(key)
            .ok_or_else(|| GraphError::VertexNotFound(key.to_string()))
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub(crate) fn key_of(&self, id: VertexId) -> &str {
        &self.vertices[id].key
    }

    pub(crate) fn out_arcs(&self, id: VertexId) -> &[Edge] {
        &self.vertices[id].arcs
    }

    /// First arc `from -> to`, scanning `from`'s arcs in key order and
    /// stopping once a greater destination key is reached.
    pub fn find_arc(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        let to_key = self.key_of(to);
        for edge in self.out_arcs(from) {
            if edge.target == to {
                return Some(edge);
            }
            if self.key_of(edge.target) > to_key {
                break;
            }
        }
        None
    }

    pub fn contains_vertex(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn in_degree(&self, key: &str) -> Option<usize> {
        self.find(key).map(|id| self.vertices[id].in_degree)
    }

    pub fn out_degree(&self, key: &str) -> Option<usize> {
        self.find(key).map(|id| self.vertices[id].out_degree)
    }

    /// Vertex keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(move |&id| self.key_of(id))
    }

    /// Out-arcs of `key` as `(destination key, weight)`, in destination-key order.
    pub fn arcs_from(&self, key: &str) -> Option<impl Iterator<Item = (&str, f64)>> {
        let id = self.find(key)?;
        Some(
            self.out_arcs(id)
                .iter()
                .map(move |e| (self.key_of(e.target), e.weight)),
        )
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
