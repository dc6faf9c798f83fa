//! Shared output layer: human text or stable JSON for every command.
//!
//! All three commands funnel their results through [`render_analysis`] so
//! the wire shape stays identical regardless of where the graph came
//! from.

use serde::{Deserialize, Serialize};

use taut_engine::report::{format_critical_path_summary, minutes_to_days};
use taut_engine::{CriticalPathResult, CriticalityScore, DependencyEdge, IssueNode};

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// A graph description as commands read it from a file or stdin.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRequest {
    pub issues: Vec<IssueNode>,
    pub dependencies: Vec<DependencyEdge>,
}

/// Top-level analysis result on the wire.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub metrics: Metrics,
    pub scores: Vec<CriticalityScore>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub project_duration_minutes: f64,
    pub critical_path: Vec<String>,
}

/// Print an analysis in the selected mode.
pub fn render_analysis(
    mode: OutputMode,
    metrics: &CriticalPathResult,
    scores: Vec<CriticalityScore>,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            let response = AnalysisResponse {
                metrics: Metrics {
                    project_duration_minutes: metrics.project_duration,
                    critical_path: metrics.critical_path.clone(),
                },
                scores,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputMode::Human => {
            println!("{}", format_critical_path_summary(metrics));
            println!(
                "Project duration (days): {:.2}",
                minutes_to_days(metrics.project_duration)
            );
            println!("Top criticality scores:");
            for score in &scores {
                println!(
                    "- {}: {:.3} (critical={})",
                    score.id, score.score, score.on_critical_path
                );
            }
        }
    }
    Ok(())
}
