//! Engine error taxonomy.
//!
//! All failures are immediate and synchronous: an operation either fully
//! succeeds or produces no result. The engine never catches or retries.

use thiserror::Error;

/// Failures raised by graph construction and scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two input nodes share an id; construction aborts entirely.
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    /// An edge names a node not present in the node set.
    #[error("edge references missing node: {from} -> {to}")]
    DanglingEdge { from: String, to: String },

    /// The dependency relation is not acyclic. `id` names one node on the
    /// cycle (from explicit detection) or a node left unordered (from the
    /// defensive re-check in topological sorting).
    #[error("dependency cycle detected involving {id}")]
    CycleDetected { id: String },
}

#[cfg(test)]
mod tests {
    use super::GraphError;

    #[test]
    fn messages_name_the_offending_nodes() {
        let err = GraphError::DanglingEdge {
            from: "tt-1".to_string(),
            to: "tt-9".to_string(),
        };
        assert_eq!(err.to_string(), "edge references missing node: tt-1 -> tt-9");

        let err = GraphError::CycleDetected {
            id: "tt-2".to_string(),
        };
        assert!(err.to_string().contains("tt-2"));
    }
}
