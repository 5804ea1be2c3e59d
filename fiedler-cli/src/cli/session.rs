//! Line-oriented action sessions over one engine.
//!
//! Each non-blank line names one action. Rejected actions print a message
//! and the session carries on; only I/O failures end it early.

use std::io::{BufRead, Write};

use fiedler_core::{EdgeAddition, EngineError, GraphEngine, Operation};
use thiserror::Error;
use tracing::debug;

use super::commands::{CliError, OutputFormat};

const HELP: &[&str] = &[
    "generate <nodes> <edges>  replace the graph with a random simple graph",
    "tree                      reduce to a minimum spanning forest (alias: constrain)",
    "largest                   keep only the largest connected component (alias: truncate)",
    "augment                   join the farthest unconnected pair (alias: add-edge)",
    "connectivity              print the algebraic connectivity",
    "show [text|json]          print the current nodes and edges",
    "help                      print this list",
    "quit                      end the session",
];

/// Actions that call into the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineAction {
    /// Generate a random graph from free-text counts.
    Generate {
        /// Node count as typed.
        nodes: String,
        /// Edge count as typed.
        edges: String,
    },
    /// Reduce to a minimum spanning forest.
    Tree,
    /// Keep only the largest connected component.
    Largest,
    /// Add the farthest unconnected pair as an edge.
    Augment,
    /// Report the algebraic connectivity.
    Connectivity,
}

/// One parsed session line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Run an engine operation.
    Engine(EngineAction),
    /// Print the graph in the given format.
    Show(OutputFormat),
    /// Print the action list.
    Help,
    /// Stop reading input.
    Quit,
}

/// Reasons a session line cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionParseError {
    /// The first word is not a known action.
    #[error("unknown action `{name}`; type `help` for a list")]
    Unknown {
        /// Word that failed to match.
        name: String,
    },
    /// The action received the wrong arguments.
    #[error("`{action}` expects {expected}")]
    Arguments {
        /// Canonical action name.
        action: &'static str,
        /// Description of the accepted arguments.
        expected: &'static str,
    },
}

impl Action {
    /// Parses one session line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    ///
    /// # Errors
    /// Returns [`ActionParseError`] for unknown actions or wrong arguments.
    ///
    /// # Examples
    /// ```
    /// use fiedler_cli::cli::{Action, EngineAction};
    ///
    /// let action = Action::parse("truncate").expect("known alias");
    /// assert_eq!(action, Some(Action::Engine(EngineAction::Largest)));
    /// assert_eq!(Action::parse("  # comment").expect("comment"), None);
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, ActionParseError> {
        let content = line.split('#').next().unwrap_or_default();
        let mut words = content.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let action = match name.to_ascii_lowercase().as_str() {
            "generate" | "gen" => match args.as_slice() {
                [nodes, edges] => Self::Engine(EngineAction::Generate {
                    nodes: (*nodes).to_owned(),
                    edges: (*edges).to_owned(),
                }),
                _ => {
                    return Err(ActionParseError::Arguments {
                        action: "generate",
                        expected: "<nodes> <edges>",
                    });
                }
            },
            "tree" | "constrain" => no_args("tree", &args, Self::Engine(EngineAction::Tree))?,
            "largest" | "truncate" => {
                no_args("largest", &args, Self::Engine(EngineAction::Largest))?
            }
            "augment" | "add-edge" => {
                no_args("augment", &args, Self::Engine(EngineAction::Augment))?
            }
            "connectivity" => no_args(
                "connectivity",
                &args,
                Self::Engine(EngineAction::Connectivity),
            )?,
            "show" => match args.as_slice() {
                [] | ["text"] => Self::Show(OutputFormat::Text),
                ["json"] => Self::Show(OutputFormat::Json),
                _ => {
                    return Err(ActionParseError::Arguments {
                        action: "show",
                        expected: "`text` or `json`",
                    });
                }
            },
            "help" => no_args("help", &args, Self::Help)?,
            "quit" | "exit" => no_args("quit", &args, Self::Quit)?,
            _ => {
                return Err(ActionParseError::Unknown {
                    name: name.to_owned(),
                });
            }
        };
        Ok(Some(action))
    }
}

fn no_args(
    action: &'static str,
    args: &[&str],
    parsed: Action,
) -> Result<Action, ActionParseError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(ActionParseError::Arguments {
            action,
            expected: "no arguments",
        })
    }
}

/// Counters reported when a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that parsed into an action.
    pub executed: usize,
    /// Lines that failed to parse or whose engine operation was rejected.
    pub rejected: usize,
}

/// Drives an engine from textual actions and writes one message per action.
#[derive(Debug)]
pub struct Session<W> {
    engine: GraphEngine,
    writer: W,
    stats: SessionStats,
}

impl<W: Write> Session<W> {
    /// Wraps `engine` and writes messages to `writer`.
    pub fn new(engine: GraphEngine, writer: W) -> Self {
        Self {
            engine,
            writer,
            stats: SessionStats::default(),
        }
    }

    /// Borrows the engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn engine(&self) -> &GraphEngine { &self.engine }

    /// Returns the engine and writer.
    pub fn into_parts(self) -> (GraphEngine, W) {
        (self.engine, self.writer)
    }

    /// Reads lines until end of input or `quit`.
    ///
    /// # Errors
    /// Returns [`CliError`] when reading or writing fails.
    pub fn run(&mut self, input: impl BufRead) -> Result<SessionStats, CliError> {
        for line in input.lines() {
            let line = line?;
            match Action::parse(&line) {
                Ok(None) => {}
                Ok(Some(Action::Quit)) => break,
                Ok(Some(action)) => self.execute(&action)?,
                Err(error) => {
                    self.stats.rejected += 1;
                    writeln!(self.writer, "{error}")?;
                }
            }
        }
        self.writer.flush()?;
        Ok(self.stats)
    }

    /// Executes one action and writes its message.
    ///
    /// # Errors
    /// Returns [`CliError`] when writing fails or a snapshot cannot be
    /// encoded.
    pub fn execute(&mut self, action: &Action) -> Result<(), CliError> {
        self.stats.executed += 1;
        match action {
            Action::Engine(engine_action) => {
                let message = perform(&mut self.engine, engine_action).unwrap_or_else(|error| {
                    self.stats.rejected += 1;
                    describe_error(&error)
                });
                writeln!(self.writer, "{message}")?;
            }
            Action::Show(format) => self.show(*format)?,
            Action::Help => {
                for line in HELP {
                    writeln!(self.writer, "{line}")?;
                }
            }
            Action::Quit => {}
        }
        Ok(())
    }

    fn show(&mut self, format: OutputFormat) -> Result<(), CliError> {
        let snapshot = self.engine.snapshot();
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, &snapshot)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Text => {
                let nodes: Vec<String> = snapshot.nodes.iter().map(ToString::to_string).collect();
                let edges: Vec<String> = snapshot
                    .edges
                    .iter()
                    .map(|(source, target)| format!("({source}, {target})"))
                    .collect();
                writeln!(self.writer, "nodes ({}): {}", nodes.len(), nodes.join(" "))?;
                writeln!(self.writer, "edges ({}): {}", edges.len(), edges.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Runs one engine action and returns its log line.
///
/// # Errors
/// Propagates the [`EngineError`] of the underlying operation.
pub fn perform(engine: &mut GraphEngine, action: &EngineAction) -> Result<String, EngineError> {
    debug!(?action, "performing action");
    let message = match action {
        EngineAction::Generate { nodes, edges } => {
            engine.generate_from_input(nodes, edges)?;
            let graph = engine.graph();
            format!(
                "Generated graph with {} nodes and {} edges.",
                graph.node_count(),
                graph.edge_count()
            )
        }
        EngineAction::Tree => {
            engine.reduce_to_minimal_connected_structure()?;
            "Constrained graph to its minimal connected structure.".to_owned()
        }
        EngineAction::Largest => {
            engine.reduce_to_largest_component()?;
            "Truncated graph to its largest connected component.".to_owned()
        }
        EngineAction::Augment => describe_addition(&engine.add_max_distance_edge()?),
        EngineAction::Connectivity => {
            format!("Algebraic connectivity: {:.4}", engine.algebraic_connectivity())
        }
    };
    Ok(message)
}

fn describe_addition(addition: &EdgeAddition) -> String {
    let (source, target) = addition.edge().endpoints();
    if addition.after() > addition.before() {
        format!(
            "Added edge ({source}, {target}). Algebraic connectivity increased from {:.4} to {:.4}.",
            addition.before(),
            addition.after()
        )
    } else {
        format!(
            "Added edge ({source}, {target}). Algebraic connectivity unchanged at {:.4}.",
            addition.before()
        )
    }
}

/// Maps an engine error to the message shown in a session.
#[must_use]
pub fn describe_error(error: &EngineError) -> String {
    match error {
        EngineError::InvalidCount { .. } => {
            "Please enter valid integers for nodes and edges.".to_owned()
        }
        EngineError::TooFewNodes {
            operation: Operation::ReduceToMinimalConnectedStructure,
            required,
            ..
        } => format!(
            "Graph must have at least {required} nodes to create a minimal connected structure."
        ),
        EngineError::TooFewNodes {
            operation: Operation::ReduceToLargestComponent,
            required,
            ..
        } => format!(
            "Graph must have at least {required} nodes to find the largest connected component."
        ),
        EngineError::NoCandidate => "No suitable edge found to add.".to_owned(),
        other => format!("Error [{}]: {other}.", other.code()),
    }
}
