//! Critical path analysis for the dependency graph.
//!
//! # Overview
//!
//! The critical path is the set of nodes with **zero float** — any delay on
//! them pushes out the earliest possible project finish. Durations are real
//! minutes; nothing is rounded until presentation.
//!
//! # Definitions
//!
//! | Term              | Definition |
//! |-------------------|------------|
//! | `earliest_start`  | Max `earliest_finish` over predecessors (0 for sources). |
//! | `earliest_finish` | `earliest_start + duration`. |
//! | `latest_finish`   | Min `latest_start` over successors (project duration for sinks). |
//! | `latest_start`    | `latest_finish - duration`. |
//! | `total_float`     | `latest_start - earliest_start`; ~0 on the critical path. |
//!
//! # Algorithm
//!
//! 1. **Forward pass** in topological order computes earliest times.
//! 2. Project duration = max `earliest_finish` (0 for an empty graph).
//! 3. **Backward pass** in reverse topological order computes latest times.
//! 4. Nodes whose float is within [`FLOAT_TOLERANCE`] of zero form the
//!    critical path, emitted in topological order. With several disjoint
//!    zero-float chains the list interleaves them in schedule order; it is
//!    the zero-float *set*, not one reconstructed path.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::Dag;
use crate::schedule::topo::topological_order;

/// Comparison tolerance for zero-float classification.
pub const FLOAT_TOLERANCE: f64 = 1e-6;

/// Per-node timing computed during critical path analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTiming {
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    /// `latest_start - earliest_start`; scheduling slack in minutes.
    pub total_float: f64,
    pub on_critical_path: bool,
}

/// Result of critical path analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPathResult {
    /// The topological order the passes ran over.
    pub order: Vec<String>,
    /// Max earliest-finish across all nodes, in minutes.
    pub project_duration: f64,
    /// Per-node timings, keyed by id.
    pub timings: HashMap<String, NodeTiming>,
    /// All zero-float node ids, in topological order.
    pub critical_path: Vec<String>,
}

/// Run the two-pass critical path computation over `dag`.
///
/// Calling this twice on the same graph yields identical results; nothing
/// is cached or mutated.
///
/// # Errors
///
/// Propagates [`GraphError::CycleDetected`] from the internal topological
/// sort (cannot trigger on a [`Dag`] built through [`Dag::build`]).
#[instrument(skip(dag), fields(nodes = dag.node_count()))]
pub fn compute_critical_path(dag: &Dag) -> Result<CriticalPathResult, GraphError> {
    let order = topological_order(dag)?;

    let mut earliest_start: HashMap<String, f64> = HashMap::with_capacity(order.len());
    let mut earliest_finish: HashMap<String, f64> = HashMap::with_capacity(order.len());

    for id in &order {
        let es = dag
            .predecessors(id)
            .into_iter()
            .map(|pred| earliest_finish.get(pred).copied().unwrap_or(0.0))
            .fold(0.0_f64, f64::max);
        let ef = es + dag.duration(id);
        earliest_start.insert(id.clone(), es);
        earliest_finish.insert(id.clone(), ef);
    }

    let project_duration = earliest_finish.values().copied().fold(0.0_f64, f64::max);

    let mut latest_start: HashMap<String, f64> = HashMap::with_capacity(order.len());
    let mut latest_finish: HashMap<String, f64> = HashMap::with_capacity(order.len());

    for id in order.iter().rev() {
        let successors = dag.successors(id);
        let lf = if successors.is_empty() {
            project_duration
        } else {
            successors
                .into_iter()
                .map(|succ| latest_start.get(succ).copied().unwrap_or(project_duration))
                .fold(f64::INFINITY, f64::min)
        };
        let ls = lf - dag.duration(id);
        latest_finish.insert(id.clone(), lf);
        latest_start.insert(id.clone(), ls);
    }

    let mut timings: HashMap<String, NodeTiming> = HashMap::with_capacity(order.len());
    let mut critical_path: Vec<String> = Vec::new();

    for id in &order {
        let es = earliest_start[id];
        let ls = latest_start[id];
        let total_float = ls - es;
        let on_critical_path = total_float.abs() < FLOAT_TOLERANCE;
        if on_critical_path {
            critical_path.push(id.clone());
        }
        timings.insert(
            id.clone(),
            NodeTiming {
                earliest_start: es,
                earliest_finish: earliest_finish[id],
                latest_start: ls,
                latest_finish: latest_finish[id],
                total_float,
                on_critical_path,
            },
        );
    }

    Ok(CriticalPathResult {
        order,
        project_duration,
        timings,
        critical_path,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyEdge, IssueNode};

    fn dag_of(nodes: &[(&str, f64)], pairs: &[(&str, &str)]) -> Dag {
        let nodes = nodes
            .iter()
            .map(|(id, minutes)| IssueNode::new(*id, *minutes))
            .collect();
        let edges = pairs
            .iter()
            .map(|(from, to)| DependencyEdge::new(*from, *to))
            .collect();
        Dag::build(nodes, edges).expect("acyclic")
    }

    #[test]
    fn empty_graph_has_zero_duration() {
        let result = compute_critical_path(&dag_of(&[], &[])).expect("ok");
        assert!((result.project_duration - 0.0).abs() < f64::EPSILON);
        assert!(result.critical_path.is_empty());
        assert!(result.timings.is_empty());
    }

    #[test]
    fn single_node_is_its_own_critical_path() {
        let result = compute_critical_path(&dag_of(&[("a", 120.0)], &[])).expect("ok");
        assert!((result.project_duration - 120.0).abs() < FLOAT_TOLERANCE);
        assert_eq!(result.critical_path, vec!["a"]);

        let timing = &result.timings["a"];
        assert!((timing.earliest_start - 0.0).abs() < FLOAT_TOLERANCE);
        assert!((timing.earliest_finish - 120.0).abs() < FLOAT_TOLERANCE);
        assert!(timing.on_critical_path);
    }

    #[test]
    fn two_node_chain_sums_durations() {
        // a(60) → b(30): project = 90, both critical.
        let result =
            compute_critical_path(&dag_of(&[("a", 60.0), ("b", 30.0)], &[("a", "b")]))
                .expect("ok");
        assert!((result.project_duration - 90.0).abs() < FLOAT_TOLERANCE);
        assert_eq!(result.critical_path, vec!["a", "b"]);
    }

    #[test]
    fn weighted_diamond_identifies_slack_branch() {
        // a(60) → b(120) → c(60), a(60) → d(30) → c(60).
        // Long branch through b: 60 + 120 + 60 = 240.
        // Short branch through d: 60 + 30 + 60 = 150, so d carries slack.
        let dag = dag_of(
            &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
            &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
        );
        let result = compute_critical_path(&dag).expect("ok");

        assert!((result.project_duration - 240.0).abs() < FLOAT_TOLERANCE);
        assert_eq!(result.critical_path, vec!["a", "b", "c"]);

        // d can slip by 90 minutes without moving c.
        let d = &result.timings["d"];
        assert!((d.total_float - 90.0).abs() < FLOAT_TOLERANCE);
        assert!(!d.on_critical_path);

        let b = &result.timings["b"];
        assert!((b.total_float - 0.0).abs() < FLOAT_TOLERANCE);
    }

    #[test]
    fn timing_invariants_hold() {
        let dag = dag_of(
            &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
            &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
        );
        let result = compute_critical_path(&dag).expect("ok");

        let max_ef = result
            .timings
            .values()
            .map(|t| t.earliest_finish)
            .fold(0.0_f64, f64::max);
        assert!((max_ef - result.project_duration).abs() < FLOAT_TOLERANCE);

        for (id, t) in &result.timings {
            assert!(
                t.earliest_start <= t.latest_start + FLOAT_TOLERANCE,
                "{id}: es <= ls"
            );
            assert!(
                t.earliest_finish <= t.latest_finish + FLOAT_TOLERANCE,
                "{id}: ef <= lf"
            );
            assert!(
                (t.total_float - (t.latest_start - t.earliest_start)).abs() < FLOAT_TOLERANCE,
                "{id}: float = ls - es"
            );
        }
    }

    #[test]
    fn disjoint_critical_chains_interleave_in_schedule_order() {
        // Two disconnected chains of equal length: both are entirely
        // zero-float, so the critical list interleaves them in topological
        // order rather than forming one contiguous walk.
        let dag = dag_of(
            &[("a", 60.0), ("b", 60.0), ("x", 60.0), ("y", 60.0)],
            &[("a", "b"), ("x", "y")],
        );
        let result = compute_critical_path(&dag).expect("ok");
        assert_eq!(result.critical_path, vec!["a", "x", "b", "y"]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let dag = dag_of(
            &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
            &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
        );
        let first = compute_critical_path(&dag).expect("ok");
        let second = compute_critical_path(&dag).expect("ok");
        assert_eq!(first, second);
    }

    #[test]
    fn zero_duration_nodes_share_timing_with_neighbors() {
        // Milestone-style zero-duration node between two real tasks.
        let dag = dag_of(
            &[("a", 60.0), ("m", 0.0), ("b", 60.0)],
            &[("a", "m"), ("m", "b")],
        );
        let result = compute_critical_path(&dag).expect("ok");
        assert!((result.project_duration - 120.0).abs() < FLOAT_TOLERANCE);
        assert_eq!(result.critical_path, vec!["a", "m", "b"]);
        let m = &result.timings["m"];
        assert!((m.earliest_start - 60.0).abs() < FLOAT_TOLERANCE);
        assert!((m.earliest_finish - 60.0).abs() < FLOAT_TOLERANCE);
    }
}
