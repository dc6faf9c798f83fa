//! Input types for graph construction.
//!
//! These are the wire-facing shapes callers hand to [`crate::Dag::build`].
//! Field names serialize in camelCase to match the JSON the HTTP and
//! tracker collaborators exchange.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unit of work. Identity is the `id`; `duration_minutes` drives all
/// timing math. Immutable once handed to the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNode {
    pub id: String,
    /// External tracker key (e.g. `ALPHA-1`), when the node came from an
    /// issue tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Non-negative duration in minutes.
    pub duration_minutes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Free-form metadata carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, Value>>,
}

impl IssueNode {
    /// Build a bare node with just an id and a duration.
    #[must_use]
    pub fn new(id: impl Into<String>, duration_minutes: f64) -> Self {
        Self {
            id: id.into(),
            key: None,
            title: None,
            duration_minutes,
            start_date: None,
            due_date: None,
            data: None,
        }
    }

    /// Attach a display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A directed "from blocks to" relation between two node ids.
///
/// Both endpoints must name nodes present in the input node set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
    /// Relation-type label (e.g. `blocks`, `relates`). Informational only;
    /// the builder treats every edge as a scheduling dependency.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl DependencyEdge {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            link_type: None,
        }
    }

    /// An edge carrying the conventional `blocks` label.
    #[must_use]
    pub fn blocks(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            link_type: Some("blocks".to_string()),
        }
    }
}
