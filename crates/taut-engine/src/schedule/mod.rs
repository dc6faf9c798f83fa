//! Topological scheduling and critical-path analysis.
//!
//! [`topological_order`] linearizes the graph with Kahn's algorithm;
//! [`compute_critical_path`] runs the forward/backward longest-path passes
//! over that order to produce per-node timings and the zero-float set.

pub mod critical_path;
pub mod topo;

pub use critical_path::{compute_critical_path, CriticalPathResult, NodeTiming, FLOAT_TOLERANCE};
pub use topo::topological_order;
