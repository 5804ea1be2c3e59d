//! Property-based tests for the graph engine.
//!
//! Random graphs drawn by [`strategies`] are pushed through every engine
//! operation and checked against structural invariants and independent
//! oracles: node and edge counts after generation, spanning forest size and
//! component preservation, largest-component maximality and idempotence, and
//! augmentation optimality against a brute-force Floyd-Warshall scan.

mod oracle;
mod strategies;
mod tests;
