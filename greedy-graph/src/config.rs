use crate::greedy::dijkstra::DijkstraConfig;
use crate::greedy::prim::PrimConfig;

#[cfg(feature = "serde")]
pub use self::toml_config::{ConfigError, EdgeConfig, GraphConfig};

/// Settings for every algorithm that takes options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AlgorithmConfig {
    pub prim: PrimConfig,
    pub dijkstra: DijkstraConfig,
}

#[cfg(feature = "serde")]
impl AlgorithmConfig {
    /// Parse algorithm settings from TOML. Missing tables and keys take
    /// their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Toml(e.to_string()))
    }
}

#[cfg(feature = "serde")]
mod toml_config {
    use serde::Deserialize;
    use thiserror::Error;

    use super::AlgorithmConfig;
    use crate::error::{GraphError, InvalidGraph};
    use crate::graph::{Edge, Weight, WeightedGraph};
    use crate::greedy::dijkstra::DijkstraConfig;
    use crate::greedy::prim::PrimConfig;

    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("config parse error: {0}")]
        Toml(String),

        #[error(transparent)]
        Graph(#[from] GraphError),
    }

    /// One `[u, v, weight]` entry. The weight is signed so that negative
    /// values are reported as invalid rather than as a parse failure.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    pub struct EdgeConfig(pub usize, pub usize, pub i64);

    /// A graph and algorithm settings described in TOML:
    ///
    /// ```toml
    /// vertex_count = 3
    /// edges = [[0, 1, 1], [1, 2, 2], [0, 2, 4]]
    ///
    /// [prim]
    /// start = 0
    ///
    /// [dijkstra]
    /// tie_break = "first-minimum"
    /// ```
    #[derive(Debug, Clone, Deserialize)]
    pub struct GraphConfig {
        pub vertex_count: usize,
        #[serde(default)]
        pub edges: Vec<EdgeConfig>,
        #[serde(default)]
        pub prim: PrimConfig,
        #[serde(default)]
        pub dijkstra: DijkstraConfig,
    }

    impl GraphConfig {
        pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
            toml::from_str(toml_str).map_err(|e| ConfigError::Toml(e.to_string()))
        }

        /// Validate weights and build the graph.
        pub fn build(&self) -> Result<WeightedGraph, ConfigError> {
            let edges = self
                .edges
                .iter()
                .map(|&EdgeConfig(u, v, weight)| {
                    if weight < 0 {
                        return Err(InvalidGraph::NegativeWeight { u, v, weight });
                    }
                    let weight = Weight::try_from(weight)
                        .map_err(|_| InvalidGraph::WeightTooLarge { u, v, weight })?;
                    Ok(Edge::new(u, v, weight))
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(GraphError::from)?;
            Ok(WeightedGraph::from_edges(self.vertex_count, edges)?)
        }

        pub fn algorithms(&self) -> AlgorithmConfig {
            AlgorithmConfig {
                prim: self.prim.clone(),
                dijkstra: self.dijkstra.clone(),
            }
        }
    }
}
