//! Greedy optimization on undirected graphs with nonnegative integer weights.
//!
//! - [`prim`] and [`kruskal`] build minimum spanning trees (spanning forests
//!   on disconnected input).
//! - [`dijkstra`] computes single-source shortest distances and paths.
//! - [`DisjointSet`] is the union-find structure Kruskal relies on.
//!
//! Each algorithm also runs step by step ([`PrimSteps`], [`KruskalSteps`],
//! [`DijkstraSteps`]) for callers that want to observe intermediate choices.
//!
//! Enable the `serde` feature for TOML configuration and serializable
//! results, and `parallel` to sort Kruskal's edge list with rayon.

pub mod config;
pub mod error;
pub mod graph;
pub mod greedy;

pub use config::AlgorithmConfig;
#[cfg(feature = "serde")]
pub use config::{ConfigError, EdgeConfig, GraphConfig};
pub use error::{GraphError, InvalidGraph};
pub use graph::{Edge, Weight, WeightedGraph};
pub use greedy::dijkstra::{dijkstra, dijkstra_with, DijkstraConfig, DijkstraSteps, SettledVertex};
pub use greedy::kruskal::{kruskal, KruskalStep, KruskalSteps};
pub use greedy::paths::{Distance, Path, Reachability, ShortestPaths};
pub use greedy::prim::{prim, prim_with, PrimConfig, PrimStep, PrimSteps};
pub use greedy::select::TieBreak;
pub use greedy::spanning::{Coverage, SpanningForest};
pub use greedy::unionfind::DisjointSet;
