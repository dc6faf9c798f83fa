//! Criticality score computation and ranking.

#![allow(clippy::module_name_repetitions)]

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::graph::Dag;
use crate::metrics::betweenness_centrality;
use crate::schedule::CriticalPathResult;

/// Configurable weights for the composite formula.
///
/// Weights are not required to sum to 1 and are not validated; the caller
/// owns meaningful weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalityWeights {
    pub on_critical_path: f64,
    pub float: f64,
    pub betweenness: f64,
    pub indegree: f64,
}

impl Default for CriticalityWeights {
    fn default() -> Self {
        Self {
            on_critical_path: 0.5,
            float: 0.25,
            betweenness: 0.15,
            indegree: 0.1,
        }
    }
}

/// Per-node composite score plus the signals that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalityScore {
    pub id: String,
    pub score: f64,
    /// `1 - float/maxFloat`, or 1.0 for every node when no float spread
    /// exists.
    pub normalized_float: f64,
    pub betweenness: f64,
    pub indegree: usize,
    pub outdegree: usize,
    pub on_critical_path: bool,
}

/// Score and rank every node in `dag`, descending by score.
///
/// Ties keep the input order of the node list (the sort is stable).
/// Betweenness is recomputed internally from `dag`.
#[must_use]
#[instrument(skip(dag, metrics, weights), fields(nodes = dag.node_count()))]
#[allow(clippy::cast_precision_loss)]
pub fn compute_criticality_scores(
    dag: &Dag,
    metrics: &CriticalPathResult,
    weights: &CriticalityWeights,
) -> Vec<CriticalityScore> {
    let betweenness = betweenness_centrality(dag);

    let max_float = metrics
        .timings
        .values()
        .map(|t| t.total_float)
        .fold(0.0_f64, f64::max);
    let max_indegree = dag.ids().map(|id| dag.indegree(id)).max().unwrap_or(0);

    let mut scores: Vec<CriticalityScore> = Vec::with_capacity(dag.node_count());

    for id in dag.ids() {
        let Some(timing) = metrics.timings.get(id) else {
            continue;
        };

        let normalized_float = if max_float > 0.0 {
            1.0 - timing.total_float / max_float
        } else {
            1.0
        };
        let bc = betweenness.get(id).copied().unwrap_or(0.0);
        let indegree = dag.indegree(id);
        let indegree_normalized = if max_indegree > 0 {
            indegree as f64 / max_indegree as f64
        } else {
            0.0
        };
        let critical = if timing.on_critical_path { 1.0 } else { 0.0 };

        let score = weights.on_critical_path * critical
            + weights.float * normalized_float
            + weights.betweenness * bc
            + weights.indegree * indegree_normalized;

        scores.push(CriticalityScore {
            id: id.to_string(),
            score,
            normalized_float,
            betweenness: bc,
            indegree,
            outdegree: dag.outdegree(id),
            on_critical_path: timing.on_critical_path,
        });
    }

    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scores
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
