//! A* trace CLI library.
//!
//! This crate provides the subcommand handlers and output selection for the
//! `astar-trace` binary.

pub mod commands;
pub mod output;
