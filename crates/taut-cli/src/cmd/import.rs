//! `taut import` — analyze an issue tracker export.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use taut_adapter::{graph_input, parse_search_response};
use taut_engine::{compute_critical_path, compute_criticality_scores, CriticalityWeights, Dag};

use crate::output::{render_analysis, OutputMode};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Tracker search response export (JSON).
    pub input: PathBuf,

    /// Duration in minutes assigned to issues without an estimate.
    #[arg(long, default_value = "60")]
    pub default_duration: f64,
}

pub fn run_import(args: &ImportArgs, output: OutputMode) -> anyhow::Result<()> {
    let payload = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let issues = parse_search_response(&payload)?;
    info!(issues = issues.len(), "normalized tracker export");

    let (nodes, edges) = graph_input(&issues, args.default_duration);
    let dag = Dag::build(nodes, edges)?;
    let metrics = compute_critical_path(&dag)?;
    let scores = compute_criticality_scores(&dag, &metrics, &CriticalityWeights::default());

    render_analysis(output, &metrics, scores)
}
