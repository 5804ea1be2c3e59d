//! Fiedler core library.
//!
//! An in-memory engine that holds one undirected simple graph and transforms
//! it while tracking its algebraic connectivity:
//!
//! - [`GraphEngine::generate`] draws a random graph with exact node and edge
//!   counts.
//! - [`GraphEngine::reduce_to_minimal_connected_structure`] keeps a minimum
//!   spanning forest.
//! - [`GraphEngine::reduce_to_largest_component`] keeps the largest connected
//!   component.
//! - [`GraphEngine::add_max_distance_edge`] joins the most distant unconnected
//!   pair.
//! - [`GraphEngine::algebraic_connectivity`] returns the second-smallest
//!   Laplacian eigenvalue.
//!
//! # Tie-breaks
//!
//! Spanning forests keep edges in canonical `(source, target)` order,
//! component size ties go to the component discovered first in node-id
//! order, and distance ties go to the first pair in ascending `(u, v)` scan
//! order.
//!
//! # Features
//!
//! - `parallel` (default): run all-pairs distance sweeps on the Rayon pool.
//! - `metrics`: emit `engine_operations_total` and
//!   `engine_operation_errors_total` counters.
//! - `serde`: derive `Serialize` for [`GraphSnapshot`] and [`Edge`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod components;
mod distance;
mod engine;
mod error;
mod generate;
mod graph;
mod input;
mod mst;
mod operation;
mod spectral;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::EngineBuilder,
    components::{connected_components, is_connected, largest_component},
    distance::{CandidatePair, DistanceTable, farthest_unlinked_pair},
    engine::{EdgeAddition, GraphEngine, MIN_REDUCIBLE_NODES},
    error::{EngineError, EngineErrorCode, ErrorKind, Result},
    generate::{MAX_NODES, edge_capacity, random_graph},
    graph::{Edge, Graph, GraphSnapshot, NodeId},
    input::parse_count,
    mst::{SpanningForest, minimum_spanning_forest},
    operation::Operation,
    spectral::{algebraic_connectivity, laplacian_matrix},
};
