//! Tracker wire types and normalization.
//!
//! The wire structs mirror the tracker's search response verbatim (field
//! names included); everything downstream of [`normalize_issue`] uses the
//! normalized shape only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

/// Errors raised while parsing a tracker export.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to parse tracker search response")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    issues: Vec<TrackerIssue>,
}

/// A single issue exactly as the tracker serializes it.
#[derive(Debug, Deserialize)]
pub struct TrackerIssue {
    pub id: String,
    pub key: String,
    pub fields: IssueFields,
    #[serde(rename = "self")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    pub status: StatusField,
    #[serde(default)]
    pub assignee: Option<AssigneeField>,
    #[serde(default, rename = "duedate")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub timetracking: Option<TimeTracking>,
    #[serde(default)]
    pub issuelinks: Vec<RawIssueLink>,
}

#[derive(Debug, Deserialize)]
pub struct StatusField {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AssigneeField {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct TimeTracking {
    #[serde(default, rename = "remainingEstimateSeconds")]
    pub remaining_estimate_seconds: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawIssueLink {
    #[serde(default, rename = "type")]
    pub link_type: Option<LinkTypeField>,
    #[serde(default, rename = "outwardIssue")]
    pub outward_issue: Option<LinkedIssue>,
    #[serde(default, rename = "inwardIssue")]
    pub inward_issue: Option<LinkedIssue>,
}

#[derive(Debug, Deserialize)]
pub struct LinkTypeField {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkedIssue {
    pub key: String,
}

// ---------------------------------------------------------------------------
// Normalized shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirection {
    Outward,
    Inward,
}

/// One issue link in normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    pub direction: LinkDirection,
    #[serde(rename = "type")]
    pub link_type: String,
    pub target_key: String,
}

/// Tracker issue after normalization: minutes instead of seconds, flat
/// fields, uniform links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedIssue {
    pub external_id: String,
    pub key: String,
    pub title: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Remaining estimate rounded to whole minutes; 0 when the tracker
    /// has no estimate.
    pub estimate_minutes: i64,
    pub url: String,
    pub links: Vec<IssueLink>,
}

/// Parse a raw JSON search response into normalized issues.
///
/// # Errors
///
/// Returns [`AdapterError::Parse`] when the payload is not valid JSON or
/// does not match the tracker's search response shape.
#[instrument(skip(payload), fields(bytes = payload.len()))]
pub fn parse_search_response(payload: &str) -> Result<Vec<NormalizedIssue>, AdapterError> {
    let response: SearchResponse = serde_json::from_str(payload)?;
    Ok(response.issues.into_iter().map(normalize_issue).collect())
}

/// Normalize one tracker issue.
///
/// Estimates arrive in seconds and are rounded to whole minutes. Links
/// that name neither an outward nor an inward issue degrade to an outward
/// `relates` link with an empty target instead of failing the issue.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_issue(issue: TrackerIssue) -> NormalizedIssue {
    let links = issue
        .fields
        .issuelinks
        .into_iter()
        .map(|link| {
            let link_type = link
                .link_type
                .map_or_else(|| "relates".to_string(), |t| t.name);
            if let Some(target) = link.outward_issue {
                IssueLink {
                    direction: LinkDirection::Outward,
                    link_type,
                    target_key: target.key,
                }
            } else if let Some(target) = link.inward_issue {
                IssueLink {
                    direction: LinkDirection::Inward,
                    link_type,
                    target_key: target.key,
                }
            } else {
                warn!(issue = %issue.key, "issue link names no target, degrading to relates");
                IssueLink {
                    direction: LinkDirection::Outward,
                    link_type: "relates".to_string(),
                    target_key: String::new(),
                }
            }
        })
        .collect();

    let seconds = issue
        .fields
        .timetracking
        .and_then(|t| t.remaining_estimate_seconds)
        .unwrap_or(0.0);
    let estimate_minutes = (seconds / 60.0).round() as i64;

    NormalizedIssue {
        external_id: issue.id,
        key: issue.key,
        title: issue.fields.summary,
        status: issue.fields.status.name,
        assignee: issue.fields.assignee.map(|a| a.display_name),
        due_date: issue.fields.due_date,
        estimate_minutes,
        url: issue.url,
        links,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
