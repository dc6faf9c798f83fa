//! Graph construction from node and edge lists.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::cycles;
use crate::model::{DependencyEdge, IssueNode};

/// An immutable, validated dependency graph.
///
/// Nodes are issue ids (strings); an edge `A → B` means "A blocks B".
/// Construction guarantees referential integrity (every edge endpoint is a
/// known node) and acyclicity. Node iteration order is the original input
/// order, which makes every downstream computation deterministic.
#[derive(Debug, Clone)]
pub struct Dag {
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    nodes: HashMap<String, IssueNode>,
    content_hash: String,
}

impl Dag {
    /// Build a [`Dag`] from a node list and an edge list.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateNode`] when two nodes share an id.
    /// - [`GraphError::DanglingEdge`] when an edge references an unknown id.
    /// - [`GraphError::CycleDetected`] when the edge relation is cyclic.
    #[instrument(skip(nodes, edges), fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn build(nodes: Vec<IssueNode>, edges: Vec<DependencyEdge>) -> Result<Self, GraphError> {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut node_data: HashMap<String, IssueNode> = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if node_map.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode { id: node.id });
            }
            let idx = graph.add_node(node.id.clone());
            node_map.insert(node.id.clone(), idx);
            node_data.insert(node.id.clone(), node);
        }

        let mut pairs: Vec<(String, String)> = Vec::with_capacity(edges.len());
        for edge in &edges {
            let (Some(&from), Some(&to)) = (node_map.get(&edge.from), node_map.get(&edge.to))
            else {
                return Err(GraphError::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                });
            };
            graph.add_edge(from, to, ());
            pairs.push((edge.from.clone(), edge.to.clone()));
        }

        if let Some(id) = cycles::find_cycle(&graph) {
            return Err(GraphError::CycleDetected { id });
        }

        let content_hash = compute_edge_hash(pairs);

        Ok(Self {
            graph,
            node_map,
            nodes: node_data,
            content_hash,
        })
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of dependency edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in original input order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Look up the full node record for an id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&IssueNode> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Duration in minutes for `id` (0 for unknown ids).
    #[must_use]
    pub fn duration(&self, id: &str) -> f64 {
        self.nodes.get(id).map_or(0.0, |node| node.duration_minutes)
    }

    /// Successor ids of `id`, in edge insertion order.
    #[must_use]
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, Direction::Outgoing)
    }

    /// Predecessor ids of `id`, in edge insertion order.
    #[must_use]
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.neighbor_ids(id, Direction::Incoming)
    }

    /// Number of incoming edges for `id`.
    #[must_use]
    pub fn indegree(&self, id: &str) -> usize {
        self.node_map.get(id).map_or(0, |&idx| {
            self.graph
                .neighbors_directed(idx, Direction::Incoming)
                .count()
        })
    }

    /// Number of outgoing edges for `id`.
    #[must_use]
    pub fn outdegree(&self, id: &str) -> usize {
        self.node_map.get(id).map_or(0, |&idx| {
            self.graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count()
        })
    }

    /// BLAKE3 content hash of the edge set, for caller-side caching.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub(crate) fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    fn neighbor_ids(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.graph.node_weight(n).map(String::as_str))
            .collect();
        // petgraph walks adjacency newest-edge-first; reverse to restore
        // input order.
        ids.reverse();
        ids
    }
}

/// Hash the sorted edge list so the digest changes only when edges change.
fn compute_edge_hash(mut pairs: Vec<(String, String)>) -> String {
    pairs.sort_unstable();
    let mut hasher = blake3::Hasher::new();
    for (from, to) in &pairs {
        hasher.update(from.as_bytes());
        hasher.update(b"\x00");
        hasher.update(to.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
