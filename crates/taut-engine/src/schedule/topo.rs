//! Topological ordering via Kahn's algorithm.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use petgraph::Direction;
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::Dag;

/// Produce a total order of node ids in which every predecessor precedes
/// its successors.
///
/// The queue is seeded with zero-indegree nodes in input order, so ties
/// resolve deterministically by the order nodes were supplied to
/// [`Dag::build`].
///
/// # Errors
///
/// Returns [`GraphError::CycleDetected`] when the produced order is shorter
/// than the node count. [`Dag::build`] already rejects cyclic input, so
/// this is a defensive re-check; the operation stays safe to call in
/// isolation.
#[instrument(skip(dag), fields(nodes = dag.node_count()))]
pub fn topological_order(dag: &Dag) -> Result<Vec<String>, GraphError> {
    let graph = dag.graph();
    let n = graph.node_count();

    let mut indegree: Vec<usize> = vec![0; n];
    for idx in graph.node_indices() {
        indegree[idx.index()] = graph
            .neighbors_directed(idx, Direction::Incoming)
            .count();
    }

    let mut queue: VecDeque<NodeIndex> = graph
        .node_indices()
        .filter(|idx| indegree[idx.index()] == 0)
        .collect();

    let mut order: Vec<String> = Vec::with_capacity(n);
    while let Some(v) = queue.pop_front() {
        order.push(graph[v].clone());

        // petgraph walks adjacency newest-edge-first; reverse so successors
        // unlock in input order.
        let mut successors: Vec<NodeIndex> =
            graph.neighbors_directed(v, Direction::Outgoing).collect();
        successors.reverse();

        for w in successors {
            indegree[w.index()] -= 1;
            if indegree[w.index()] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() != n {
        let id = graph
            .node_indices()
            .find(|idx| indegree[idx.index()] > 0)
            .map(|idx| graph[idx].clone())
            .unwrap_or_default();
        return Err(GraphError::CycleDetected { id });
    }

    Ok(order)
}
