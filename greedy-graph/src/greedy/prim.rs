//! Prim's minimum spanning tree: grow one tree from a start vertex, always
//! adding the cheapest edge that reaches a new vertex.

use crate::error::{check_vertex, GraphError};
use crate::graph::{Edge, Weight, WeightedGraph};

use super::select::{select_min, TieBreak};
use super::spanning::SpanningForest;

/// Prim configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PrimConfig {
    /// Vertex the tree grows from.
    pub start: usize,
    pub tie_break: TieBreak,
    /// When the frontier runs dry before every vertex is included, grow a new
    /// tree from the lowest-index vertex left out. When `false`, stop with the
    /// start vertex's tree only.
    pub spanning_forest: bool,
}

impl Default for PrimConfig {
    fn default() -> Self {
        Self {
            start: 0,
            tie_break: TieBreak::FirstMinimum,
            spanning_forest: true,
        }
    }
}

/// One vertex joining the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimStep {
    pub vertex: usize,
    /// Edge that connected `vertex`; `None` when `vertex` roots a tree.
    pub via: Option<Edge>,
}

impl PrimStep {
    pub fn is_root(&self) -> bool {
        self.via.is_none()
    }
}

/// Prim's algorithm as an iterator over vertices joining the tree.
///
/// Ends when every vertex is included. On a disconnected graph it either
/// reseeds from the next unreached vertex or stops, per
/// [`PrimConfig::spanning_forest`].
pub struct PrimSteps<'g> {
    graph: &'g WeightedGraph,
    tie_break: TieBreak,
    spanning_forest: bool,
    included: Vec<bool>,
    frontier_weight: Vec<Option<Weight>>,
    frontier_parent: Vec<Option<usize>>,
    tree: Vec<Edge>,
}

impl<'g> PrimSteps<'g> {
    pub fn new(graph: &'g WeightedGraph, config: &PrimConfig) -> Result<Self, GraphError> {
        let n = graph.vertex_count();
        check_vertex(config.start, n)?;

        let mut frontier_weight = vec![None; n];
        frontier_weight[config.start] = Some(0);

        Ok(Self {
            graph,
            tie_break: config.tie_break,
            spanning_forest: config.spanning_forest,
            included: vec![false; n],
            frontier_weight,
            frontier_parent: vec![None; n],
            tree: Vec::with_capacity(n.saturating_sub(1)),
        })
    }

    /// Tree edges chosen so far.
    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }

    /// Cheapest known connecting edge for each vertex not yet in the tree.
    pub fn frontier(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.included.len()).filter_map(move |v| {
            if self.included[v] {
                return None;
            }
            let parent = self.frontier_parent[v]?;
            let weight = self.frontier_weight[v]?;
            Some(Edge::new(parent, v, weight))
        })
    }

    /// Run to completion and return the tree (or partial tree).
    pub fn finish(mut self) -> SpanningForest {
        self.by_ref().for_each(drop);
        SpanningForest::new(self.tree, self.graph.vertex_count())
    }
}

impl Iterator for PrimSteps<'_> {
    type Item = PrimStep;

    fn next(&mut self) -> Option<PrimStep> {
        let included = &self.included;
        let candidates = self
            .frontier_weight
            .iter()
            .enumerate()
            .filter(|&(v, _)| !included[v])
            .filter_map(|(v, w)| w.map(|w| (v, w)));
        let (vertex, weight) = match select_min(candidates, self.tie_break) {
            Some(found) => found,
            None if self.spanning_forest => {
                let root = self.included.iter().position(|&inside| !inside)?;
                log::trace!("prim: frontier exhausted, new tree at {root}");
                (root, 0)
            }
            None => return None,
        };

        self.included[vertex] = true;
        let via = self.frontier_parent[vertex].map(|parent| Edge::new(parent, vertex, weight));
        if let Some(edge) = via {
            self.tree.push(edge);
        }

        for &(v, w) in self.graph.adjacent(vertex) {
            if self.included[v] {
                continue;
            }
            if self.frontier_weight[v].map_or(true, |current| w < current) {
                self.frontier_weight[v] = Some(w);
                self.frontier_parent[v] = Some(vertex);
            }
        }

        log::trace!("prim: include {vertex} via {via:?}");
        Some(PrimStep { vertex, via })
    }
}

/// Minimum spanning tree by Prim's algorithm, grown from vertex 0.
pub fn prim(graph: &WeightedGraph) -> SpanningForest {
    // Every graph has a vertex 0, so the default start is always in range.
    prim_with(graph, &PrimConfig::default())
        .unwrap_or_else(|_| SpanningForest::new(Vec::new(), graph.vertex_count()))
}

/// Prim's algorithm with an explicit start vertex, tie-break rule, and
/// disconnected-graph policy.
pub fn prim_with(graph: &WeightedGraph, config: &PrimConfig) -> Result<SpanningForest, GraphError> {
    let forest = PrimSteps::new(graph, config)?.finish();
    log_result(graph, &forest);
    Ok(forest)
}

fn log_result(graph: &WeightedGraph, forest: &SpanningForest) {
    log::debug!(
        "prim: {} vertices, {} edges -> {} tree edges, weight {}, {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        forest.len(),
        forest.total_weight(),
        forest.coverage()
    );
}
