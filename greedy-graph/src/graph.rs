use smallvec::SmallVec;

use crate::error::{check_vertex, GraphError, InvalidGraph};

/// Edge weight. Nonnegative by construction; sums are carried as `u64`.
pub type Weight = u32;

/// An undirected weighted edge.
///
/// `source` and `destination` are interchangeable identifiers, not a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.source {
            Some(self.destination)
        } else if vertex == self.destination {
            Some(self.source)
        } else {
            None
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.source == a && self.destination == b) || (self.source == b && self.destination == a)
    }
}

/// Neighbor list of one vertex, sorted by neighbor index.
type Adjacency = SmallVec<[(usize, Weight); 4]>;

/// An immutable undirected graph with nonnegative integer weights.
///
/// An absent edge is distinct from an edge of weight zero. Self-loops and
/// parallel edges are rejected at construction.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Adjacency>,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    /// Build a graph on `vertex_count` vertices from an edge list.
    ///
    /// Each unordered pair may appear at most once, in either orientation.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Edge>,
    {
        if vertex_count == 0 {
            return Err(InvalidGraph::NoVertices.into());
        }

        let mut adjacency = empty_adjacency(vertex_count)?;
        for edge in edges {
            check_vertex(edge.source, vertex_count)?;
            check_vertex(edge.destination, vertex_count)?;
            if edge.source == edge.destination {
                return Err(InvalidGraph::SelfLoop {
                    vertex: edge.source,
                }
                .into());
            }
            if !insert_half(&mut adjacency[edge.source], edge.destination, edge.weight) {
                return Err(InvalidGraph::DuplicateEdge {
                    u: edge.source,
                    v: edge.destination,
                }
                .into());
            }
            // The mirror slot cannot be occupied if the first one was free.
            insert_half(&mut adjacency[edge.destination], edge.source, edge.weight);
        }

        Ok(Self::from_adjacency(adjacency))
    }

    /// Build a graph from a square, symmetric matrix of optional weights.
    ///
    /// `None` marks a missing edge; the diagonal must be `None`.
    pub fn from_adjacency_matrix<R>(rows: &[R]) -> Result<Self, GraphError>
    where
        R: AsRef<[Option<Weight>]>,
    {
        Self::from_dense(rows.len(), |i| rows[i].as_ref().len(), |i, j| {
            rows[i].as_ref()[j]
        })
    }

    /// Build a graph from a square, symmetric matrix where `0` means "no edge".
    ///
    /// Zero-weight edges cannot be expressed in this form; use
    /// [`WeightedGraph::from_adjacency_matrix`] or [`WeightedGraph::from_edges`]
    /// for those.
    pub fn from_zero_absent_matrix<R>(rows: &[R]) -> Result<Self, GraphError>
    where
        R: AsRef<[Weight]>,
    {
        Self::from_dense(rows.len(), |i| rows[i].as_ref().len(), |i, j| {
            match rows[i].as_ref()[j] {
                0 => None,
                w => Some(w),
            }
        })
    }

    fn from_dense(
        n: usize,
        row_len: impl Fn(usize) -> usize,
        cell: impl Fn(usize, usize) -> Option<Weight>,
    ) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(InvalidGraph::NoVertices.into());
        }
        for row in 0..n {
            let len = row_len(row);
            if len != n {
                return Err(InvalidGraph::NotSquare {
                    row,
                    len,
                    expected: n,
                }
                .into());
            }
        }

        let mut adjacency = empty_adjacency(n)?;
        for i in 0..n {
            if cell(i, i).is_some() {
                return Err(InvalidGraph::SelfLoop { vertex: i }.into());
            }
            for j in (i + 1)..n {
                let upper = cell(i, j);
                if upper != cell(j, i) {
                    return Err(InvalidGraph::Asymmetric { row: i, column: j }.into());
                }
                if let Some(w) = upper {
                    // Row-major scan keeps both lists sorted.
                    adjacency[i].push((j, w));
                    adjacency[j].push((i, w));
                }
            }
        }

        Ok(Self::from_adjacency(adjacency))
    }

    fn from_adjacency(adjacency: Vec<Adjacency>) -> Self {
        let edges: Vec<Edge> = adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, list)| {
                list.iter()
                    .filter(move |&&(v, _)| u < v)
                    .map(move |&(v, w)| Edge::new(u, v, w))
            })
            .collect();

        log::debug!(
            "built weighted graph: {} vertices, {} edges",
            adjacency.len(),
            edges.len()
        );

        Self { adjacency, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Weight of the edge between `u` and `v`, or `None` if there is no edge.
    pub fn weight(&self, u: usize, v: usize) -> Result<Option<Weight>, GraphError> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        Ok(self.weight_unchecked(u, v))
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        Ok(self.weight(u, v)?.is_some())
    }

    /// Neighbors of `u` with connecting weights, in ascending vertex order.
    pub fn neighbors(&self, u: usize) -> Result<&[(usize, Weight)], GraphError> {
        check_vertex(u, self.vertex_count())?;
        Ok(&self.adjacency[u])
    }

    pub fn degree(&self, u: usize) -> Result<usize, GraphError> {
        Ok(self.neighbors(u)?.len())
    }

    /// Every edge exactly once, as `source < destination`, in upper-triangle
    /// row-major order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| e.weight as u64).sum()
    }

    pub(crate) fn adjacent(&self, u: usize) -> &[(usize, Weight)] {
        &self.adjacency[u]
    }

    pub(crate) fn weight_unchecked(&self, u: usize, v: usize) -> Option<Weight> {
        let list = &self.adjacency[u];
        list.binary_search_by_key(&v, |&(n, _)| n)
            .ok()
            .map(|i| list[i].1)
    }
}

/// One empty neighbor list per vertex, failing instead of aborting when the
/// allocation cannot be made.
fn empty_adjacency(vertex_count: usize) -> Result<Vec<Adjacency>, GraphError> {
    let mut adjacency = Vec::new();
    adjacency
        .try_reserve_exact(vertex_count)
        .map_err(|_| InvalidGraph::TooManyVertices { vertex_count })?;
    adjacency.resize_with(vertex_count, Adjacency::new);
    Ok(adjacency)
}

/// Insert `(v, w)` into a sorted neighbor list. Returns `false` if `v` is
/// already present.
fn insert_half(list: &mut Adjacency, v: usize, w: Weight) -> bool {
    match list.binary_search_by_key(&v, |&(n, _)| n) {
        Ok(_) => false,
        Err(pos) => {
            list.insert(pos, (v, w));
            true
        }
    }
}
