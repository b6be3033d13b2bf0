//! Output selection for search reports.
//!
//! Maps the CLI's `--format` flag onto the library's report formats and
//! resolves where the report is written.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use astar_trace_lib::ReportFormat;

/// Report format selected on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Fixed-column trace table.
    #[default]
    Table,
    /// JSON document with every trace field.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ReportFormat::Table,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Open the report destination: the given file, or stdout when absent.
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory {}", parent.display())
                })?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create report file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_map_onto_library_formats() {
        assert_eq!(ReportFormat::from(OutputFormat::Table), ReportFormat::Table);
        assert_eq!(ReportFormat::from(OutputFormat::Json), ReportFormat::Json);
    }

    #[test]
    fn sink_creates_missing_parent_directories() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("report.txt");

        {
            let mut sink = open_sink(Some(&path)).expect("open sink");
            sink.write_all(b"hello").expect("write");
            sink.flush().expect("flush");
        }

        assert_eq!(fs::read_to_string(&path).expect("read back"), "hello");
    }
}
