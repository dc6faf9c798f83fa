//! Centrality metrics for the dependency graph.
//!
//! Computed independently of scheduling: the graph is treated as a plain
//! directed unweighted graph for shortest-path purposes. The only metric
//! the scorer consumes is betweenness; degree counts come straight from
//! [`crate::Dag`].

pub mod betweenness;

pub use betweenness::betweenness_centrality;
