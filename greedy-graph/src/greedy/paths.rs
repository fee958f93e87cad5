use std::fmt;

use smallvec::SmallVec;

use crate::error::{check_vertex, GraphError};

/// Tentative or final distance from the source. Every finite value orders
/// below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// How a vertex relates to the source of a shortest-path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Reachability {
    Source,
    Reachable { distance: u64, predecessor: usize },
    Unreachable,
}

/// A shortest route, listed from source to destination. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    vertices: SmallVec<[usize; 8]>,
    distance: u64,
}

impl Path {
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    pub fn source(&self) -> usize {
        self.vertices[0]
    }

    pub fn destination(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Single-source shortest distances and predecessor links.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        source: usize,
        distances: Vec<Distance>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        debug_assert_eq!(distances[source], Distance::Finite(0));
        Self {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn distance(&self, v: usize) -> Result<Distance, GraphError> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.distances[v])
    }

    pub fn predecessor(&self, v: usize) -> Result<Option<usize>, GraphError> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.predecessors[v])
    }

    pub fn reachability(&self, v: usize) -> Result<Reachability, GraphError> {
        check_vertex(v, self.vertex_count())?;
        if v == self.source {
            return Ok(Reachability::Source);
        }
        Ok(match (self.distances[v], self.predecessors[v]) {
            (Distance::Finite(distance), Some(predecessor)) => Reachability::Reachable {
                distance,
                predecessor,
            },
            _ => Reachability::Unreachable,
        })
    }

    pub fn is_reachable(&self, v: usize) -> Result<bool, GraphError> {
        Ok(self.reachability(v)? != Reachability::Unreachable)
    }

    /// Route from the source to `destination`, or `None` if unreachable.
    pub fn path_to(&self, destination: usize) -> Result<Option<Path>, GraphError> {
        check_vertex(destination, self.vertex_count())?;
        let distance = match self.distances[destination] {
            Distance::Finite(d) => d,
            Distance::Infinite => return Ok(None),
        };
        if destination != self.source && self.predecessors[destination].is_none() {
            return Ok(None);
        }

        // Predecessor links form a tree rooted at the source, so the chain
        // is at most `vertex_count` long.
        let mut vertices: SmallVec<[usize; 8]> =
            std::iter::successors(Some(destination), |&v| self.predecessors[v])
                .take(self.vertex_count())
                .collect();
        vertices.reverse();
        debug_assert_eq!(vertices[0], self.source);

        Ok(Some(Path { vertices, distance }))
    }
}
