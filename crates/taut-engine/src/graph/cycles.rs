//! Cycle detection via iterative three-color depth-first search.
//!
//! White = untouched, gray = on the active DFS path, black = fully
//! explored. Reaching a gray node again means the active path loops back
//! on itself. The DFS uses an explicit frame stack so pathological input
//! sizes cannot overflow the call stack.

use petgraph::graph::{DiGraph, NodeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Return one node on a cycle, or `None` when the graph is acyclic.
pub(crate) fn find_cycle(graph: &DiGraph<String, ()>) -> Option<String> {
    let mut color = vec![Color::White; graph.node_count()];

    for start in graph.node_indices() {
        if color[start.index()] != Color::White {
            continue;
        }

        color[start.index()] = Color::Gray;
        // Each frame: (node, its successors, next successor to visit).
        let mut stack: Vec<(NodeIndex, Vec<NodeIndex>, usize)> =
            vec![(start, graph.neighbors(start).collect(), 0)];

        while let Some(frame) = stack.last_mut() {
            if frame.2 < frame.1.len() {
                let next = frame.1[frame.2];
                frame.2 += 1;

                match color[next.index()] {
                    Color::Gray => {
                        return graph.node_weight(next).cloned();
                    }
                    Color::White => {
                        color[next.index()] = Color::Gray;
                        let neighbors: Vec<NodeIndex> = graph.neighbors(next).collect();
                        stack.push((next, neighbors, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[frame.0.index()] = Color::Black;
                stack.pop();
            }
        }
    }

    None
}
