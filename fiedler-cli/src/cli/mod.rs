//! Command-line interface orchestration for the fiedler graph engine.
//!
//! `session` reads one action per line from a script or standard input and
//! keeps going when an action is rejected. `run` generates a graph, applies
//! a fixed list of steps, and prints a text or JSON summary.

mod commands;
mod session;

pub use commands::{
    Cli, CliError, Command, OutputFormat, RunCommand, RunSummary, SessionArgs, Step,
    render_summary, run_cli,
};
pub use session::{
    Action, ActionParseError, EngineAction, Session, SessionStats, describe_error, perform,
};

#[cfg(test)]
mod test_helpers;
