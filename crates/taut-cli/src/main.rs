#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "taut: critical-path analysis for issue dependency graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze a graph description",
        long_about = "Read a JSON graph description (issues + dependencies) and print \
                      project duration, critical path, and criticality scores.",
        after_help = "EXAMPLES:\n    # Analyze a graph file\n    taut compute graph.json\n\n    # Read from stdin, emit JSON\n    cat graph.json | taut compute --json"
    )]
    Compute(cmd::compute::ComputeArgs),

    #[command(
        about = "Analyze an issue tracker export",
        long_about = "Read a tracker search response export, normalize issues and \
                      blocking links into a graph, and analyze it.",
        after_help = "EXAMPLES:\n    # Analyze an exported search response\n    taut import export.json\n\n    # Unestimated issues default to 2 hours\n    taut import export.json --default-duration 120"
    )]
    Import(cmd::import::ImportArgs),

    #[command(
        about = "Analyze a built-in demo project",
        after_help = "EXAMPLES:\n    # Run the demo in JSON mode\n    taut demo --json"
    )]
    Demo,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TAUT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "taut=debug,info"
        } else {
            "taut=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    match cli.command {
        Commands::Compute(ref args) => cmd::compute::run_compute(args, output),
        Commands::Import(ref args) => cmd::import::run_import(args, output),
        Commands::Demo => cmd::demo::run_demo(output),
    }
}
