#![forbid(unsafe_code)]
//! taut-engine: scheduling analysis over issue dependency graphs.
//!
//! # Pipeline
//!
//! ```text
//! Vec<IssueNode> + Vec<DependencyEdge>
//!        ↓  Dag::build()            (validation + cycle detection)
//! Dag (acyclic DiGraph, id-indexed)
//!        ↓  topological_order()     (Kahn's algorithm)
//!        ↓  compute_critical_path() (forward/backward pass)
//! CriticalPathResult (timings, float, zero-float path)
//!        ↓  compute_criticality_scores()
//! Vec<CriticalityScore> (ranked, descending)
//! ```
//!
//! [`betweenness_centrality`] is independent of scheduling and feeds the
//! scorer as one input signal.
//!
//! # Conventions
//!
//! - **Errors**: engine operations return `Result<_, GraphError>`; the
//!   engine never recovers internally — failures propagate to the caller.
//! - **Logging**: `tracing` macros; entry points carry `#[instrument]`.
//! - **Purity**: every operation is a synchronous pure function over an
//!   immutable [`Dag`]; results are recomputed on each call.

pub mod error;
pub mod graph;
pub mod metrics;
pub mod model;
pub mod report;
pub mod schedule;
pub mod score;

pub use error::GraphError;
pub use graph::Dag;
pub use metrics::betweenness_centrality;
pub use model::{DependencyEdge, IssueNode};
pub use schedule::{
    compute_critical_path, topological_order, CriticalPathResult, NodeTiming, FLOAT_TOLERANCE,
};
pub use score::{compute_criticality_scores, CriticalityScore, CriticalityWeights};
