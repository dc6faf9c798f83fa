#![forbid(unsafe_code)]
//! taut-adapter: issue tracker export normalization.
//!
//! Parses JSON search responses exported from an issue tracker, normalizes
//! each issue (estimates to minutes, links to a uniform shape), and
//! converts normalized issues into the node/edge lists [`taut_engine`]
//! consumes.
//!
//! The adapter never talks to a network; it takes the exported JSON as a
//! string, which keeps it testable and keeps credentials out of this
//! crate.

pub mod convert;
pub mod issue;

pub use convert::graph_input;
pub use issue::{
    normalize_issue, parse_search_response, AdapterError, IssueLink, LinkDirection,
    NormalizedIssue,
};
