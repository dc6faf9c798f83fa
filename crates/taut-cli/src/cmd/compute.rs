//! `taut compute` — analyze a JSON graph description.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::debug;

use taut_engine::{compute_critical_path, compute_criticality_scores, CriticalityWeights, Dag};

use crate::output::{render_analysis, GraphRequest, OutputMode};

#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Graph description file; reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Weight of critical-path membership in the composite score.
    #[arg(long)]
    pub weight_critical: Option<f64>,

    /// Weight of normalized float in the composite score.
    #[arg(long)]
    pub weight_float: Option<f64>,

    /// Weight of betweenness centrality in the composite score.
    #[arg(long)]
    pub weight_betweenness: Option<f64>,

    /// Weight of normalized indegree in the composite score.
    #[arg(long)]
    pub weight_indegree: Option<f64>,
}

impl ComputeArgs {
    fn weights(&self) -> CriticalityWeights {
        let defaults = CriticalityWeights::default();
        CriticalityWeights {
            on_critical_path: self.weight_critical.unwrap_or(defaults.on_critical_path),
            float: self.weight_float.unwrap_or(defaults.float),
            betweenness: self.weight_betweenness.unwrap_or(defaults.betweenness),
            indegree: self.weight_indegree.unwrap_or(defaults.indegree),
        }
    }
}

pub fn run_compute(args: &ComputeArgs, output: OutputMode) -> anyhow::Result<()> {
    let payload = read_input(args.input.as_deref())?;
    let request: GraphRequest =
        serde_json::from_str(&payload).context("invalid graph description")?;

    debug!(
        issues = request.issues.len(),
        dependencies = request.dependencies.len(),
        "parsed graph description"
    );

    let dag = Dag::build(request.issues, request.dependencies)?;
    let metrics = compute_critical_path(&dag)?;
    let scores = compute_criticality_scores(&dag, &metrics, &args.weights());

    render_analysis(output, &metrics, scores)
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            Ok(buffer)
        }
    }
}
