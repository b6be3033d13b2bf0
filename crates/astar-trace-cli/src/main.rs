use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use astar_trace_cli::commands::search::{handle_search_command, SearchCommandArgs};
use astar_trace_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Traced A* search over small weighted graphs")]
struct Cli {
    /// Report format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run A* over an input file and write the step-by-step trace.
    Search {
        /// Input file with `from to cost`, `node h`, `START node` and `GOAL node` lines.
        #[arg(long, short = 'i')]
        input: PathBuf,
        /// Write the report to this file instead of stdout.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Start node, overriding the input's START line.
        #[arg(long)]
        start: Option<String>,
        /// Goal node, overriding the input's GOAL line.
        #[arg(long)]
        goal: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            input,
            output,
            start,
            goal,
        } => {
            let args = SearchCommandArgs {
                input,
                output,
                start,
                goal,
            };
            handle_search_command(&args, cli.format).map(|_| ())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
