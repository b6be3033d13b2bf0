//! Traced A* search.
//!
//! [`search`] returns a lazy [`Search`] iterator that yields one
//! [`TraceEvent::Expanded`] per node expansion and finishes with exactly one
//! terminal event: [`TraceEvent::Found`] or [`TraceEvent::Exhausted`].
//! [`run`] drains that iterator into a [`SearchOutcome`].
//!
//! The closed set is first-closed-wins: once a node has been expanded it is
//! never expanded again, even if a cheaper path to it turns up later. The
//! returned path is therefore optimal only when the heuristic is both
//! admissible and consistent.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::iter::FusedIterator;

use serde::Serialize;
use tracing::debug;

use crate::graph::{Graph, HeuristicTable, NodeId};

/// Maximum number of entries kept in a step's frontier summary.
pub const FRONTIER_SUMMARY_LIMIT: usize = 4;

/// One neighbour pushed onto the frontier while expanding a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    pub neighbour: NodeId,
    pub edge_cost: u64,
    /// h(neighbour)
    pub heuristic: u64,
    /// g(neighbour) along the path through the expanded node.
    pub path_cost: u64,
    /// f = g + h
    pub estimate: u64,
}

/// Lowest f currently queued for a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierItem {
    pub node: NodeId,
    pub estimate: u64,
}

/// Trace record for a single node expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionStep {
    /// Zero-based position of this expansion within the search.
    pub index: usize,
    pub node: NodeId,
    /// Neighbours pushed during this step, in edge declaration order.
    pub expansions: Vec<Expansion>,
    /// Up to [`FRONTIER_SUMMARY_LIMIT`] frontier nodes, ascending by f.
    pub frontier: Vec<FrontierItem>,
}

/// Successful search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathFound {
    pub path: Vec<NodeId>,
    pub cost: u64,
    /// h(goal), reported alongside the final row of the trace table.
    pub heuristic: u64,
}

impl PathFound {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Item produced by [`Search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    Expanded(ExpansionStep),
    Found(PathFound),
    Exhausted,
}

impl TraceEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TraceEvent::Expanded(_))
    }
}

/// Terminal outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult {
    /// The goal was dequeued.
    Found(PathFound),
    /// The frontier emptied before the goal was reached.
    Exhausted,
}

impl SearchResult {
    pub fn path(&self) -> Option<&PathFound> {
        match self {
            SearchResult::Found(found) => Some(found),
            SearchResult::Exhausted => None,
        }
    }
}

/// Every expansion step of a search together with its terminal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub steps: Vec<ExpansionStep>,
    pub result: SearchResult,
}

impl SearchOutcome {
    /// Collect a stream of trace events. Events after the first terminal one
    /// are ignored; a stream without a terminal event counts as exhausted.
    pub fn from_events(events: impl IntoIterator<Item = TraceEvent>) -> Self {
        let mut steps = Vec::new();
        for event in events {
            match event {
                TraceEvent::Expanded(step) => steps.push(step),
                TraceEvent::Found(found) => {
                    return Self {
                        steps,
                        result: SearchResult::Found(found),
                    }
                }
                TraceEvent::Exhausted => break,
            }
        }

        Self {
            steps,
            result: SearchResult::Exhausted,
        }
    }
}

/// Start a traced A* search from `start` towards `goal`.
///
/// Nodes missing from `graph` have no outgoing edges and nodes missing from
/// `heuristics` estimate to zero; neither is an error.
pub fn search<'a>(
    graph: &'a Graph,
    heuristics: &'a HeuristicTable,
    start: &str,
    goal: &str,
) -> Search<'a> {
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimate: heuristics.get(start),
        cost: 0,
        node: start.to_string(),
        path: vec![start.to_string()],
    });

    Search {
        graph,
        heuristics,
        goal: goal.to_string(),
        frontier,
        closed: HashSet::new(),
        expanded: 0,
        finished: false,
    }
}

/// Run a search to completion and collect its trace.
pub fn run(graph: &Graph, heuristics: &HeuristicTable, start: &str, goal: &str) -> SearchOutcome {
    SearchOutcome::from_events(search(graph, heuristics, start, goal))
}

/// Lazy A* search over borrowed inputs. See the module docs for the event
/// protocol.
#[derive(Debug)]
pub struct Search<'a> {
    graph: &'a Graph,
    heuristics: &'a HeuristicTable,
    goal: NodeId,
    frontier: BinaryHeap<FrontierEntry>,
    closed: HashSet<NodeId>,
    expanded: usize,
    finished: bool,
}

impl Search<'_> {
    fn finish(&mut self) {
        self.finished = true;
        self.frontier.clear();
        self.closed.clear();
    }

    fn expand(&mut self, entry: FrontierEntry) -> ExpansionStep {
        let graph = self.graph;
        let heuristics = self.heuristics;
        let FrontierEntry {
            cost, node, path, ..
        } = entry;

        self.closed.insert(node.clone());

        let mut expansions = Vec::new();
        for edge in graph.neighbours(&node) {
            if self.closed.contains(&edge.target) {
                continue;
            }

            let path_cost = cost.saturating_add(edge.cost);
            let heuristic = heuristics.get(&edge.target);
            let estimate = path_cost.saturating_add(heuristic);

            let mut next_path = path.clone();
            next_path.push(edge.target.clone());
            self.frontier.push(FrontierEntry {
                estimate,
                cost: path_cost,
                node: edge.target.clone(),
                path: next_path,
            });

            expansions.push(Expansion {
                neighbour: edge.target.clone(),
                edge_cost: edge.cost,
                heuristic,
                path_cost,
                estimate,
            });
        }

        let index = self.expanded;
        self.expanded += 1;
        let frontier = self.frontier_summary();

        debug!(
            step = index,
            node = %node,
            pushed = expansions.len(),
            queued = self.frontier.len(),
            "expanded node"
        );

        ExpansionStep {
            index,
            node,
            expansions,
            frontier,
        }
    }

    fn frontier_summary(&self) -> Vec<FrontierItem> {
        let mut best: HashMap<&str, u64> = HashMap::new();
        for entry in self.frontier.iter() {
            best.entry(entry.node.as_str())
                .and_modify(|estimate| *estimate = (*estimate).min(entry.estimate))
                .or_insert(entry.estimate);
        }

        let mut items: Vec<FrontierItem> = best
            .into_iter()
            .map(|(node, estimate)| FrontierItem {
                node: node.to_string(),
                estimate,
            })
            .collect();
        items.sort_by(|a, b| {
            a.estimate
                .cmp(&b.estimate)
                .then_with(|| a.node.cmp(&b.node))
        });
        items.truncate(FRONTIER_SUMMARY_LIMIT);
        items
    }
}

impl Iterator for Search<'_> {
    type Item = TraceEvent;

    fn next(&mut self) -> Option<TraceEvent> {
        if self.finished {
            return None;
        }

        while let Some(entry) = self.frontier.pop() {
            if entry.node == self.goal {
                let found = PathFound {
                    heuristic: self.heuristics.get(&entry.node),
                    cost: entry.cost,
                    path: entry.path,
                };
                debug!(
                    cost = found.cost,
                    hops = found.hop_count(),
                    expanded = self.expanded,
                    "goal reached"
                );
                self.finish();
                return Some(TraceEvent::Found(found));
            }

            if self.closed.contains(&entry.node) {
                debug!(node = %entry.node, estimate = entry.estimate, "skipping closed node");
                continue;
            }

            return Some(TraceEvent::Expanded(self.expand(entry)));
        }

        debug!(expanded = self.expanded, "frontier exhausted");
        self.finish();
        Some(TraceEvent::Exhausted)
    }
}

impl FusedIterator for Search<'_> {}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    estimate: u64,
    cost: u64,
    node: NodeId,
    path: Vec<NodeId>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap pops the smallest (f, g, node, path).
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
