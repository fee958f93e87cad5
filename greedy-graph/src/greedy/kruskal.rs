//! Kruskal's minimum spanning forest: consume edges globally sorted by
//! weight, keeping each one that joins two different trees.

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;

use crate::graph::{Edge, WeightedGraph};

use super::spanning::SpanningForest;
use super::unionfind::DisjointSet;

/// Outcome of considering one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum KruskalStep {
    Accepted(Edge),
    /// Both endpoints were already connected; the edge would close a cycle.
    Rejected(Edge),
}

impl KruskalStep {
    pub fn edge(&self) -> Edge {
        match *self {
            KruskalStep::Accepted(e) | KruskalStep::Rejected(e) => e,
        }
    }
}

/// Kruskal's algorithm as an iterator over edge decisions.
///
/// Stops after `vertex_count - 1` acceptances or when the edges run out.
pub struct KruskalSteps {
    sorted: std::vec::IntoIter<Edge>,
    sets: DisjointSet,
    accepted: Vec<Edge>,
    vertex_count: usize,
}

impl KruskalSteps {
    pub fn new(graph: &WeightedGraph) -> Self {
        let mut edges = graph.edges().to_vec();
        sort_by_weight(&mut edges);
        let vertex_count = graph.vertex_count();
        Self {
            sorted: edges.into_iter(),
            sets: DisjointSet::new(vertex_count),
            accepted: Vec::with_capacity(vertex_count.saturating_sub(1)),
            vertex_count,
        }
    }

    /// Edges accepted so far.
    pub fn accepted(&self) -> &[Edge] {
        &self.accepted
    }

    /// Run to completion and return the forest.
    pub fn finish(mut self) -> SpanningForest {
        self.by_ref().for_each(drop);
        SpanningForest::new(self.accepted, self.vertex_count)
    }
}

impl Iterator for KruskalSteps {
    type Item = KruskalStep;

    fn next(&mut self) -> Option<KruskalStep> {
        if self.accepted.len() + 1 >= self.vertex_count {
            return None;
        }
        let edge = self.sorted.next()?;
        // Endpoints were range-checked when the graph was built.
        let merged = self.sets.union(edge.source, edge.destination);
        debug_assert!(merged.is_ok(), "edge endpoint out of range: {edge:?}");
        if matches!(merged, Ok(true)) {
            log::trace!("kruskal: accept {edge:?}");
            self.accepted.push(edge);
            Some(KruskalStep::Accepted(edge))
        } else {
            log::trace!("kruskal: reject {edge:?} (cycle)");
            Some(KruskalStep::Rejected(edge))
        }
    }
}

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Equal-weight edges are taken in the graph's edge enumeration order.
pub fn kruskal(graph: &WeightedGraph) -> SpanningForest {
    let forest = KruskalSteps::new(graph).finish();
    log::debug!(
        "kruskal: {} vertices, {} edges -> {} accepted, weight {}, {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        forest.len(),
        forest.total_weight(),
        forest.coverage()
    );
    forest
}

/// Stable ascending sort by weight.
fn sort_by_weight(edges: &mut [Edge]) {
    #[cfg(feature = "parallel")]
    edges.par_sort_by_key(|e| e.weight);

    #[cfg(not(feature = "parallel"))]
    edges.sort_by_key(|e| e.weight);
}
