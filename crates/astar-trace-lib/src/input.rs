//! Reader for the plain-text search input format.
//!
//! Each non-blank line that does not start with `#` is one of:
//!
//! ```text
//! A B 4      # directed edge A -> B with cost 4
//! A 3        # heuristic h(A) = 3
//! START A
//! GOAL C
//! ```
//!
//! Lines matching none of these shapes are skipped rather than rejected.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, HeuristicTable, NodeId};

const START_DIRECTIVE: &str = "START";
const GOAL_DIRECTIVE: &str = "GOAL";

/// Everything a search needs, as read from an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub graph: Graph,
    pub heuristics: HeuristicTable,
    pub start: Option<NodeId>,
    pub goal: Option<NodeId>,
}

impl Problem {
    /// Return the start and goal nodes, failing when either was never declared.
    pub fn endpoints(&self) -> Result<(&str, &str)> {
        let start = self.start.as_deref().ok_or(Error::MissingStart)?;
        let goal = self.goal.as_deref().ok_or(Error::MissingGoal)?;
        Ok((start, goal))
    }

    /// Replace the declared endpoints with explicit overrides where given.
    pub fn with_endpoints(mut self, start: Option<String>, goal: Option<String>) -> Self {
        if start.is_some() {
            self.start = start;
        }
        if goal.is_some() {
            self.goal = goal;
        }
        self
    }
}

/// Load a problem from a file on disk.
pub fn load_problem(path: &Path) -> Result<Problem> {
    let file = fs::File::open(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    let problem = read_problem(file).map_err(|err| match err {
        Error::Io(source) => Error::InputRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(
        path = %path.display(),
        sources = problem.graph.source_count(),
        edges = problem.graph.edge_count(),
        heuristics = problem.heuristics.len(),
        "loaded search input"
    );
    Ok(problem)
}

/// Read a problem from any reader (file, stdin, in-memory buffer).
pub fn read_problem<R: Read>(mut reader: R) -> Result<Problem> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_problem(&text))
}

/// Parse a problem from its textual form. Unrecognised lines are skipped.
pub fn parse_problem(text: &str) -> Problem {
    let mut problem = Problem::default();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [from, to, cost] if is_digits(cost) => match cost.parse::<u64>() {
                Ok(cost) => problem.graph.add_edge(*from, *to, cost),
                Err(_) => skip(number, line),
            },
            [node, value] if is_digits(value) => match value.parse::<u64>() {
                Ok(value) => problem.heuristics.insert(*node, value),
                Err(_) => skip(number, line),
            },
            [directive, node, ..] if *directive == START_DIRECTIVE => {
                problem.start = Some(node.to_string());
            }
            [directive, node, ..] if *directive == GOAL_DIRECTIVE => {
                problem.goal = Some(node.to_string());
            }
            _ => skip(number, line),
        }
    }

    problem
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn skip(number: usize, line: &str) {
    debug!(line = number + 1, content = line, "skipping unrecognised input line");
}
