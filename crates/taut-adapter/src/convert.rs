//! Conversion from normalized issues to engine graph input.

use std::collections::HashSet;

use tracing::{debug, instrument};

use taut_engine::{DependencyEdge, IssueNode};

use crate::issue::{LinkDirection, NormalizedIssue};

/// Convert normalized issues into node and edge lists for
/// [`taut_engine::Dag::build`].
///
/// Nodes are keyed by tracker key. Issues without a positive estimate get
/// `default_duration` minutes. Only `blocks` links (case-insensitive)
/// become edges: an outward block means this issue blocks the target, an
/// inward block means the target blocks this issue. Links pointing
/// outside the issue set are dropped so the builder never sees a dangling
/// edge.
#[must_use]
#[instrument(skip(issues), fields(issues = issues.len()))]
#[allow(clippy::cast_precision_loss)]
pub fn graph_input(
    issues: &[NormalizedIssue],
    default_duration: f64,
) -> (Vec<IssueNode>, Vec<DependencyEdge>) {
    let known: HashSet<&str> = issues.iter().map(|i| i.key.as_str()).collect();

    let mut nodes = Vec::with_capacity(issues.len());
    let mut edges = Vec::new();
    let mut seen_edges: HashSet<(String, String)> = HashSet::new();

    for issue in issues {
        let duration = if issue.estimate_minutes > 0 {
            issue.estimate_minutes as f64
        } else {
            default_duration
        };

        let mut node = IssueNode::new(issue.key.clone(), duration).with_title(issue.title.clone());
        node.key = Some(issue.key.clone());
        node.due_date = issue.due_date;
        nodes.push(node);

        for link in &issue.links {
            if !link.link_type.eq_ignore_ascii_case("blocks") {
                continue;
            }
            if !known.contains(link.target_key.as_str()) {
                debug!(
                    issue = %issue.key,
                    target = %link.target_key,
                    "dropping link to issue outside the result set"
                );
                continue;
            }

            let (from, to) = match link.direction {
                LinkDirection::Outward => (issue.key.clone(), link.target_key.clone()),
                LinkDirection::Inward => (link.target_key.clone(), issue.key.clone()),
            };
            // Trackers report each link from both endpoints; keep one copy.
            if seen_edges.insert((from.clone(), to.clone())) {
                edges.push(DependencyEdge::blocks(from, to));
            }
        }
    }

    (nodes, edges)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
