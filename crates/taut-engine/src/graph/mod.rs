//! Dependency graph construction and validation.
//!
//! # Overview
//!
//! [`Dag::build`] turns a flat node/edge list into a petgraph-backed
//! directed graph, rejecting duplicate ids, dangling edges, and cycles.
//! The resulting [`Dag`] is immutable and read-only to every downstream
//! analyzer.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A **blocks** B" — A must finish before B can
//! start.
//!
//! ## Cache Invalidation
//!
//! Each [`Dag`] carries a BLAKE3 content hash of its sorted edge list.
//! Callers wanting to cache analysis results on large graphs can key them
//! by this hash; the engine itself never caches.

pub mod build;
mod cycles;

pub use build::Dag;
