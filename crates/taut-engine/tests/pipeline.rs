//! End-to-end pipeline tests over hand-crafted graphs.
//!
//! Each scenario uses a small topology whose timings, float, and scores
//! are computed analytically and hardcoded, so any algorithm change that
//! shifts values will be caught.

use taut_engine::{
    compute_critical_path, compute_criticality_scores, topological_order, CriticalityWeights, Dag,
    DependencyEdge, GraphError, IssueNode, FLOAT_TOLERANCE,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build(nodes: &[(&str, f64)], edges: &[(&str, &str)]) -> Dag {
    try_build(nodes, edges).expect("valid dag")
}

fn try_build(nodes: &[(&str, f64)], edges: &[(&str, &str)]) -> Result<Dag, GraphError> {
    Dag::build(
        nodes
            .iter()
            .map(|(id, minutes)| IssueNode::new(*id, *minutes))
            .collect(),
        edges
            .iter()
            .map(|(from, to)| DependencyEdge::new(*from, *to))
            .collect(),
    )
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_TOLERANCE
}

// ---------------------------------------------------------------------------
// Scheduling scenarios
// ---------------------------------------------------------------------------

#[test]
fn linear_chain_sums_durations() {
    let dag = build(&[("a", 60.0), ("b", 30.0)], &[("a", "b")]);
    let result = compute_critical_path(&dag).expect("ok");

    assert!(approx(result.project_duration, 90.0));
    assert_eq!(result.critical_path, vec!["a", "b"]);
    assert!(approx(result.timings["a"].total_float, 0.0));
    assert!(approx(result.timings["b"].total_float, 0.0));
}

#[test]
fn weighted_diamond_schedules_around_the_long_branch() {
    // a(60) feeds b(120) and d(30); both feed c(60). The branch through
    // b is 240 minutes end to end, the branch through d only 150, so d
    // is the lone slack node.
    let dag = build(
        &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
        &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
    );
    let result = compute_critical_path(&dag).expect("ok");

    assert!(approx(result.project_duration, 240.0));
    assert_eq!(result.critical_path, vec!["a", "b", "c"]);
    assert!(approx(result.timings["b"].total_float, 0.0));
    assert!(result.timings["d"].total_float > 0.0);
    assert!(approx(result.timings["d"].total_float, 90.0));
}

#[test]
fn parallel_roots_keep_independent_timing() {
    let dag = build(
        &[("a", 100.0), ("b", 40.0), ("c", 10.0)],
        &[("a", "c"), ("b", "c")],
    );
    let result = compute_critical_path(&dag).expect("ok");

    assert!(approx(result.project_duration, 110.0));
    assert_eq!(result.critical_path, vec!["a", "c"]);
    // b may start as late as minute 60 without delaying c.
    assert!(approx(result.timings["b"].total_float, 60.0));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn two_node_cycle_is_rejected() {
    let err = try_build(&[("a", 60.0), ("b", 60.0)], &[("a", "b"), ("b", "a")])
        .expect_err("must reject cycle");
    assert!(matches!(err, GraphError::CycleDetected { .. }));
}

#[test]
fn self_loop_is_rejected() {
    let err = try_build(&[("a", 60.0)], &[("a", "a")]).expect_err("must reject self loop");
    assert!(matches!(err, GraphError::CycleDetected { .. }));
}

#[test]
fn dangling_edge_is_rejected() {
    let err = try_build(&[("a", 60.0)], &[("a", "ghost")]).expect_err("must reject dangling");
    match err {
        GraphError::DanglingEdge { from, to } => {
            assert_eq!(from, "a");
            assert_eq!(to, "ghost");
        }
        other => panic!("expected DanglingEdge, got {other:?}"),
    }
}

#[test]
fn duplicate_node_is_rejected() {
    let err = try_build(&[("a", 60.0), ("a", 30.0)], &[]).expect_err("must reject duplicate");
    assert!(matches!(err, GraphError::DuplicateNode { ref id } if id == "a"));
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[test]
fn bottleneck_node_outranks_its_source() {
    // b is on the critical path, has betweenness, and has indegree; a is
    // only on the critical path.
    let dag = build(
        &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
        &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
    );
    let metrics = compute_critical_path(&dag).expect("ok");
    let scores = compute_criticality_scores(&dag, &metrics, &CriticalityWeights::default());

    assert_eq!(scores[0].id, "b");
    let a_score = scores.iter().find(|s| s.id == "a").expect("a").score;
    let b_score = scores[0].score;
    assert!(b_score > a_score);

    for pair in scores.windows(2) {
        assert!(pair[0].score >= pair[1].score, "descending order");
    }
}

#[test]
fn betweenness_signal_favors_intermediaries() {
    let dag = build(
        &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
        &[("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")],
    );
    let metrics = compute_critical_path(&dag).expect("ok");
    let scores = compute_criticality_scores(&dag, &metrics, &CriticalityWeights::default());

    let b = scores.iter().find(|s| s.id == "b").expect("b");
    let a = scores.iter().find(|s| s.id == "a").expect("a");
    assert!(b.betweenness > a.betweenness);
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn topological_order_respects_every_edge() {
    let edges = [("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")];
    let dag = build(
        &[("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)],
        &edges,
    );
    let order = topological_order(&dag).expect("ok");

    let pos = |id: &str| order.iter().position(|x| x == id).expect("present");
    for (from, to) in edges {
        assert!(pos(from) < pos(to), "{from} must precede {to}");
    }
}

#[test]
fn rebuilding_identical_input_yields_identical_output() {
    let nodes = [("a", 60.0), ("b", 120.0), ("c", 60.0), ("d", 30.0)];
    let edges = [("a", "b"), ("b", "c"), ("a", "d"), ("d", "c")];

    let first = build(&nodes, &edges);
    let second = build(&nodes, &edges);

    assert_eq!(first.content_hash(), second.content_hash());
    assert_eq!(
        topological_order(&first).expect("ok"),
        topological_order(&second).expect("ok")
    );
    assert_eq!(
        compute_critical_path(&first).expect("ok"),
        compute_critical_path(&second).expect("ok")
    );
}
