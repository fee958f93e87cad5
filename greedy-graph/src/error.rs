use thiserror::Error;

/// Errors raised by graph construction, disjoint-set operations, and
/// result queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),
}

/// Reasons a graph is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraph {
    #[error("graph must have at least one vertex")]
    NoVertices,

    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooManyVertices { vertex_count: usize },

    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: usize },

    #[error("duplicate edge between {u} and {v}")]
    DuplicateEdge { u: usize, v: usize },

    #[error("negative weight {weight} on edge {u}-{v}")]
    NegativeWeight {
        u: usize,
        v: usize,
        weight: i64,
    },

    #[error("weight {weight} on edge {u}-{v} exceeds the supported maximum")]
    WeightTooLarge {
        u: usize,
        v: usize,
        weight: i64,
    },

    #[error("adjacency row {row} has length {len}, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("adjacency matrix is not symmetric at ({row}, {column})")]
    Asymmetric { row: usize, column: usize },
}

/// Fail with [`GraphError::VertexOutOfRange`] unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), GraphError> {
    if vertex >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_vertex_bounds() {
        assert!(check_vertex(0, 1).is_ok());
        assert_eq!(
            check_vertex(3, 3),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn invalid_graph_message_is_wrapped() {
        let err: GraphError = InvalidGraph::SelfLoop { vertex: 2 }.into();
        assert_eq!(err.to_string(), "invalid graph: self-loop on vertex 2");
    }
}
