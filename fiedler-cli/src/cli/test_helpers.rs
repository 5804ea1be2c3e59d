//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use fiedler_core::EngineBuilder;
use tempfile::TempDir;

use super::{Cli, CliError, Session, SessionStats, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_script(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Runs `script` through a seeded session and returns its output lines.
pub(super) fn session_lines(script: &str) -> (Vec<String>, SessionStats) {
    let engine = EngineBuilder::new().with_seed(3).build();
    let mut session = Session::new(engine, Vec::new());
    let stats = match session.run(Cursor::new(script)) {
        Ok(stats) => stats,
        Err(err) => panic!("session failed: {err}"),
    };
    let (_, output) = session.into_parts();
    (lines(output), stats)
}

pub(super) fn run_cli_to_string(cli: Cli, input: &str) -> Result<String, CliError> {
    let mut output = Vec::new();
    run_cli(cli, Cursor::new(input), &mut output)?;
    Ok(lines(output).join("\n"))
}

fn lines(output: Vec<u8>) -> Vec<String> {
    match String::from_utf8(output) {
        Ok(text) => text.lines().map(str::to_owned).collect(),
        Err(err) => panic!("output must be UTF-8: {err}"),
    }
}
