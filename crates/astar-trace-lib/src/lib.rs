//! Traced A* search library.
//!
//! This crate reads a small weighted directed graph with per-node heuristics,
//! runs A* over it while recording every expansion step, and renders the
//! resulting trace. The search itself lives in [`search`] and performs no I/O;
//! [`input`] and [`report`] are the adapters on either side of it.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod input;
pub mod report;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, HeuristicTable, NodeId};
pub use input::{load_problem, parse_problem, read_problem, Problem};
pub use report::{format_frontier, render_table, write_report, ReportFormat, SearchReport};
pub use search::{
    run, search, Expansion, ExpansionStep, FrontierItem, PathFound, Search, SearchOutcome,
    SearchResult, TraceEvent, FRONTIER_SUMMARY_LIMIT,
};
