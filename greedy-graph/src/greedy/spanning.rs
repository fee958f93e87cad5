use crate::graph::Edge;

/// Whether a spanning result covers every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coverage {
    /// Exactly `vertex_count - 1` edges: a spanning tree.
    Complete,
    /// The graph is disconnected; `missing_edges` more edges would be needed.
    Partial { missing_edges: usize },
}

/// Edges accepted by a minimum-spanning builder, in acceptance order.
///
/// Only the builders create these, so the edge count never exceeds
/// `vertex_count - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: u64,
    vertex_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(edges: Vec<Edge>, vertex_count: usize) -> Self {
        let total_weight = edges.iter().map(|e| e.weight as u64).sum();
        Self {
            edges,
            total_weight,
            vertex_count,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn coverage(&self) -> Coverage {
        let needed = self.vertex_count.saturating_sub(1);
        match needed.saturating_sub(self.edges.len()) {
            0 => Coverage::Complete,
            missing_edges => Coverage::Partial { missing_edges },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.coverage() == Coverage::Complete
    }

    /// Trees in this forest, counting each vertex it does not touch as a
    /// singleton tree.
    pub fn components(&self) -> usize {
        self.vertex_count.saturating_sub(self.edges.len())
    }
}
