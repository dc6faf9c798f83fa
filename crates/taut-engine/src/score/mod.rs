//! Composite criticality scoring.
//!
//! Combines critical-path membership, normalized float, betweenness, and
//! normalized indegree into one weighted score per node:
//!
//! `score = wCritical·[critical] + wFloat·floatNorm + wBetweenness·bc + wIndegree·inNorm`

pub mod criticality;

pub use criticality::{compute_criticality_scores, CriticalityScore, CriticalityWeights};
