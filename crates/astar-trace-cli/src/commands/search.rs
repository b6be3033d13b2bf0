//! Search command handler: read an input file, run A*, write the trace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use astar_trace_lib::{load_problem, run, write_report, SearchReport, SearchResult};

use crate::output::{open_sink, OutputFormat};

/// Arguments for the search command.
#[derive(Debug, Clone)]
pub struct SearchCommandArgs {
    /// Input file in the edge/heuristic/START/GOAL text format.
    pub input: PathBuf,
    /// Report destination; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Overrides the input's `START` directive.
    pub start: Option<String>,
    /// Overrides the input's `GOAL` directive.
    pub goal: Option<String>,
}

/// Handle the search subcommand.
///
/// Returns the report so callers can inspect the outcome; an exhausted
/// search is not an error.
pub fn handle_search_command(args: &SearchCommandArgs, format: OutputFormat) -> Result<SearchReport> {
    let problem = load_problem(&args.input)
        .with_context(|| format!("failed to load search input {}", args.input.display()))?
        .with_endpoints(args.start.clone(), args.goal.clone());

    let (start, goal) = problem
        .endpoints()
        .with_context(|| format!("incomplete search input {}", args.input.display()))?;

    info!(start, goal, edges = problem.graph.edge_count(), "running A* search");
    let outcome = run(&problem.graph, &problem.heuristics, start, goal);
    let report = SearchReport::new(start, goal, outcome);

    let sink = open_sink(args.output.as_deref())?;
    write_report(sink, &report, format.into()).context("failed to write search report")?;

    match &report.result {
        SearchResult::Found(found) => info!(
            steps = report.steps.len(),
            cost = found.cost,
            "path found"
        ),
        SearchResult::Exhausted => info!(steps = report.steps.len(), "no path found"),
    }

    if let Some(path) = &args.output {
        println!("Report written to {}", path.display());
    }

    Ok(report)
}
