//! Command implementations and argument parsing for the fiedler CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use fiedler_core::{EngineBuilder, EngineError, GraphEngine, GraphSnapshot};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use super::session::{EngineAction, Session, perform};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "fiedler",
    about = "Build, reduce, and augment a graph while tracking its algebraic connectivity."
)]
pub struct Cli {
    /// Seed for the random graph generator; omit for a fresh seed per run.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read actions line by line from a script or standard input.
    Session(SessionArgs),
    /// Generate a graph, apply steps in order, and print a summary.
    Run(RunCommand),
}

/// Options accepted by the `session` command.
#[derive(Debug, Args, Clone, Default)]
pub struct SessionArgs {
    /// Read actions from this file instead of standard input.
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of nodes to generate.
    #[arg(long)]
    pub nodes: String,

    /// Number of edges to generate.
    #[arg(long)]
    pub edges: String,

    /// Transformation applied after generation; repeat to chain steps.
    #[arg(long = "step", value_enum)]
    pub steps: Vec<Step>,

    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Transformations available to the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    /// Reduce to a minimum spanning forest.
    Tree,
    /// Keep only the largest connected component.
    Largest,
    /// Add the edge joining the most distant unconnected pair.
    Augment,
}

impl From<Step> for EngineAction {
    fn from(step: Step) -> Self {
        match step {
            Step::Tree => Self::Tree,
            Step::Largest => Self::Largest,
            Step::Augment => Self::Augment,
        }
    }
}

/// Output formats for summaries and snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A script file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading input or writing output failed.
    #[error("stream I/O failed: {0}")]
    Stream(#[from] io::Error),
    /// An engine operation was rejected.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// A snapshot or summary could not be encoded as JSON.
    #[error("failed to encode JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of the `run` command.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// One log line per applied operation.
    pub log: Vec<String>,
    /// Algebraic connectivity of the final graph.
    pub connectivity: f64,
    /// Final node and edge sets.
    pub snapshot: GraphSnapshot,
}

/// Executes the CLI command represented by `cli`.
///
/// Session actions are read from `input` unless a script is given; all
/// output goes to `writer`.
///
/// # Errors
/// Returns [`CliError`] when a script cannot be opened, I/O fails, or a
/// `run` step is rejected by the engine. Rejected session actions are
/// reported inline and do not fail the session.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use fiedler_cli::cli::{Cli, Command, OutputFormat, RunCommand, Step, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     seed: Some(7),
///     command: Command::Run(RunCommand {
///         nodes: "8".into(),
///         edges: "10".into(),
///         steps: vec![Step::Largest, Step::Tree],
///         format: OutputFormat::Text,
///     }),
/// };
/// let mut output = Vec::new();
/// run_cli(cli, std::io::empty(), &mut output)?;
/// assert!(String::from_utf8(output)?.starts_with("Generated graph with 8 nodes and 10 edges."));
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli, input: impl BufRead, mut writer: impl Write) -> Result<(), CliError> {
    let engine = EngineBuilder::new().with_optional_seed(cli.seed).build();
    match cli.command {
        Command::Session(args) => run_session(engine, &args, input, writer),
        Command::Run(command) => {
            let summary = run_command(engine, &command)?;
            render_summary(&summary, command.format, &mut writer)
        }
    }
}

#[instrument(name = "cli.session", skip_all, fields(script = ?args.script))]
fn run_session(
    engine: GraphEngine,
    args: &SessionArgs,
    input: impl BufRead,
    writer: impl Write,
) -> Result<(), CliError> {
    let mut session = Session::new(engine, writer);
    let stats = match &args.script {
        Some(path) => session.run(open_script(path)?)?,
        None => session.run(input)?,
    };
    info!(
        executed = stats.executed,
        rejected = stats.rejected,
        "session finished"
    );
    Ok(())
}

fn open_script(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(
    name = "cli.run",
    skip_all,
    fields(nodes = %command.nodes, edges = %command.edges, steps = command.steps.len()),
)]
pub(super) fn run_command(
    mut engine: GraphEngine,
    command: &RunCommand,
) -> Result<RunSummary, CliError> {
    let generate = EngineAction::Generate {
        nodes: command.nodes.clone(),
        edges: command.edges.clone(),
    };
    let mut log = vec![perform(&mut engine, &generate)?];
    for step in &command.steps {
        log.push(perform(&mut engine, &EngineAction::from(*step))?);
    }
    Ok(RunSummary {
        log,
        connectivity: engine.algebraic_connectivity(),
        snapshot: engine.snapshot(),
    })
}

/// Renders `summary` to `writer` as text or JSON.
///
/// # Errors
/// Returns [`CliError`] if writing or JSON encoding fails.
pub fn render_summary(
    summary: &RunSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, summary)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            for line in &summary.log {
                writeln!(writer, "{line}")?;
            }
            writeln!(writer, "nodes: {}", summary.snapshot.nodes.len())?;
            writeln!(writer, "edges: {}", summary.snapshot.edges.len())?;
            writeln!(writer, "algebraic connectivity: {:.4}", summary.connectivity)?;
            for (source, target) in &summary.snapshot.edges {
                writeln!(writer, "{source}\t{target}")?;
            }
        }
    }
    Ok(())
}
