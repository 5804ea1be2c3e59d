//! Support library for the `fiedler` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive sessions without spawning a subprocess.

pub mod cli;
pub mod logging;
