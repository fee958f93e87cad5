//! Dijkstra's single-source shortest paths over nonnegative weights,
//! settling one minimum-distance vertex per step.

use crate::error::{check_vertex, GraphError};
use crate::graph::WeightedGraph;

use super::paths::{Distance, ShortestPaths};
use super::select::{select_min, TieBreak};

/// Dijkstra configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DijkstraConfig {
    pub tie_break: TieBreak,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::LastMinimum,
        }
    }
}

/// A vertex whose shortest distance has just been finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SettledVertex {
    pub vertex: usize,
    pub distance: u64,
    pub predecessor: Option<usize>,
}

/// Dijkstra's algorithm as an iterator over settled vertices.
///
/// Unreachable vertices are never yielded.
pub struct DijkstraSteps<'g> {
    graph: &'g WeightedGraph,
    source: usize,
    tie_break: TieBreak,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
}

impl<'g> DijkstraSteps<'g> {
    pub fn new(
        graph: &'g WeightedGraph,
        source: usize,
        config: &DijkstraConfig,
    ) -> Result<Self, GraphError> {
        let n = graph.vertex_count();
        check_vertex(source, n)?;

        let mut distances = vec![Distance::Infinite; n];
        distances[source] = Distance::Finite(0);

        Ok(Self {
            graph,
            source,
            tie_break: config.tie_break,
            distances,
            predecessors: vec![None; n],
            settled: vec![false; n],
        })
    }

    /// Current tentative distance of `v`.
    pub fn distance(&self, v: usize) -> Result<Distance, GraphError> {
        check_vertex(v, self.distances.len())?;
        Ok(self.distances[v])
    }

    pub fn is_settled(&self, v: usize) -> Result<bool, GraphError> {
        check_vertex(v, self.settled.len())?;
        Ok(self.settled[v])
    }

    /// Run to completion and return the distance table.
    pub fn finish(mut self) -> ShortestPaths {
        self.by_ref().for_each(drop);
        ShortestPaths::new(self.source, self.distances, self.predecessors)
    }
}

impl Iterator for DijkstraSteps<'_> {
    type Item = SettledVertex;

    fn next(&mut self) -> Option<SettledVertex> {
        let settled = &self.settled;
        let candidates = self
            .distances
            .iter()
            .enumerate()
            .filter(|&(v, _)| !settled[v])
            .filter_map(|(v, d)| d.finite().map(|d| (v, d)));
        let (u, du) = select_min(candidates, self.tie_break)?;

        self.settled[u] = true;
        for &(v, w) in self.graph.adjacent(u) {
            if self.settled[v] {
                continue;
            }
            let candidate = Distance::Finite(du + w as u64);
            if candidate < self.distances[v] {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
            }
        }

        log::trace!("dijkstra: settle {u} at {du}");
        Some(SettledVertex {
            vertex: u,
            distance: du,
            predecessor: self.predecessors[u],
        })
    }
}

/// Shortest distances from `source` to every vertex.
pub fn dijkstra(graph: &WeightedGraph, source: usize) -> Result<ShortestPaths, GraphError> {
    dijkstra_with(graph, source, &DijkstraConfig::default())
}

/// Dijkstra's algorithm with an explicit tie-break rule.
pub fn dijkstra_with(
    graph: &WeightedGraph,
    source: usize,
    config: &DijkstraConfig,
) -> Result<ShortestPaths, GraphError> {
    let paths = DijkstraSteps::new(graph, source, config)?.finish();
    log::debug!(
        "dijkstra: source {source}, {} vertices, {} reachable",
        graph.vertex_count(),
        paths.distances().iter().filter(|d| d.is_finite()).count()
    );
    Ok(paths)
}
