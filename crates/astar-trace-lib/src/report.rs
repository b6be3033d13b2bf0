use std::fmt::Write as _;
use std::io;

use serde::Serialize;

use crate::error::Result;
use crate::graph::NodeId;
use crate::search::{ExpansionStep, FrontierItem, SearchOutcome, SearchResult};

const TITLE: &str = "A* search steps:";
const RULE: &str =
    "-------------------------------------------------------------------------------";
const NO_PATH: &str = "No path found!";

/// Output style for [`write_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Fixed-column trace table.
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
}

/// Complete record of one search run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<ExpansionStep>,
    pub result: SearchResult,
}

impl SearchReport {
    pub fn new(start: impl Into<NodeId>, goal: impl Into<NodeId>, outcome: SearchOutcome) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            steps: outcome.steps,
            result: outcome.result,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.result, SearchResult::Found(_))
    }
}

/// Write `report` to `writer` in the requested format.
pub fn write_report<W: io::Write>(
    mut writer: W,
    report: &SearchReport,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Table => writer.write_all(render_table(report).as_bytes())?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Render the trace table.
///
/// Only the first row of each step carries the expanded node and the
/// frontier summary; the remaining rows list one neighbour each.
pub fn render_table(report: &SearchReport) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{TITLE}\n");
    push_row(
        &mut buffer,
        ["Node", "Next", "k(u,v)", "h(v)", "g(v)", "f(v)"],
        "Open list / Result",
    );
    let _ = writeln!(buffer, "{RULE}");

    for step in &report.steps {
        render_step(&mut buffer, step);
    }

    match &report.result {
        SearchResult::Found(found) => {
            let result = format!("Path: {}, Cost: {}", found.path.join("->"), found.cost);
            let goal = found.path.last().map(String::as_str).unwrap_or("");
            push_row(
                &mut buffer,
                [
                    goal,
                    "-",
                    "-",
                    &found.heuristic.to_string(),
                    &found.cost.to_string(),
                    "-",
                ],
                &result,
            );
            let _ = writeln!(buffer, "{RULE}");
        }
        SearchResult::Exhausted => {
            let _ = writeln!(buffer, "{RULE}");
            let _ = writeln!(buffer, "\n{NO_PATH}");
        }
    }

    buffer
}

/// Format a frontier summary as `B3, C5`.
pub fn format_frontier(items: &[FrontierItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", item.node, item.estimate))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_step(buffer: &mut String, step: &ExpansionStep) {
    let summary = format_frontier(&step.frontier);

    if step.expansions.is_empty() {
        push_row(buffer, [&step.node, "-", "-", "-", "-", "-"], &summary);
        return;
    }

    for (i, expansion) in step.expansions.iter().enumerate() {
        let (node, last) = if i == 0 {
            (step.node.as_str(), summary.as_str())
        } else {
            ("", "")
        };
        push_row(
            buffer,
            [
                node,
                &expansion.neighbour,
                &expansion.edge_cost.to_string(),
                &expansion.heuristic.to_string(),
                &expansion.path_cost.to_string(),
                &expansion.estimate.to_string(),
            ],
            last,
        );
    }
}

fn push_row(buffer: &mut String, cells: [&str; 6], last: &str) {
    let [node, next, edge, h, g, f] = cells;
    let _ = writeln!(
        buffer,
        "{:<4} {:<4} {:<8} {:<6} {:<6} {:<6} {}",
        node, next, edge, h, g, f, last
    );
}
