//! Shared fixtures for the library integration tests.

use std::path::PathBuf;

use astar_trace_lib::{Graph, HeuristicTable};

/// Path to the text fixtures shared with the CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// `A -> B -> C` is cheaper than the direct `A -> C` edge.
#[allow(dead_code)]
pub fn sample_graph() -> (Graph, HeuristicTable) {
    let graph = [("A", "B", 1), ("A", "C", 4), ("B", "C", 1)]
        .into_iter()
        .collect();
    let heuristics = [("A", 3), ("B", 2), ("C", 0)].into_iter().collect();
    (graph, heuristics)
}

/// Convert a slice of names into owned node identifiers.
#[allow(dead_code)]
pub fn nodes(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
