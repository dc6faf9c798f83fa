//! `taut demo` — analyze a small built-in project.

use taut_engine::{
    compute_critical_path, compute_criticality_scores, CriticalityWeights, Dag, DependencyEdge,
    IssueNode,
};

use crate::output::{render_analysis, OutputMode};

fn demo_graph() -> (Vec<IssueNode>, Vec<DependencyEdge>) {
    let nodes = vec![
        IssueNode::new("ISSUE:ALPHA-1", 8.0 * 60.0).with_title("Provision database"),
        IssueNode::new("ISSUE:ALPHA-2", 16.0 * 60.0).with_title("Implement API"),
        IssueNode::new("ISSUE:ALPHA-3", 8.0 * 60.0).with_title("QA & Launch"),
    ];
    let edges = vec![
        DependencyEdge::blocks("ISSUE:ALPHA-1", "ISSUE:ALPHA-2"),
        DependencyEdge::blocks("ISSUE:ALPHA-2", "ISSUE:ALPHA-3"),
    ];
    (nodes, edges)
}

pub fn run_demo(output: OutputMode) -> anyhow::Result<()> {
    let (nodes, edges) = demo_graph();
    let dag = Dag::build(nodes, edges)?;
    let metrics = compute_critical_path(&dag)?;
    let scores = compute_criticality_scores(&dag, &metrics, &CriticalityWeights::default());

    render_analysis(output, &metrics, scores)
}
