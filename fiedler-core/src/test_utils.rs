//! Shared test utilities for `fiedler-core`.

use std::collections::BTreeMap;

use fiedler_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Graph, NodeId};
use crate::mst::DisjointSet;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

fn build(node_count: usize, edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Graph {
    match Graph::try_from_parts(0..node_count, edges) {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph must be valid: {err}"),
    }
}

/// Path `0 - 1 - ... - (n-1)`.
pub(crate) fn path_graph(node_count: usize) -> Graph {
    build(node_count, (1..node_count).map(|node| (node - 1, node)))
}

/// Cycle through `0..n` (`n >= 3`).
pub(crate) fn cycle_graph(node_count: usize) -> Graph {
    build(
        node_count,
        (0..node_count).map(|node| (node, (node + 1) % node_count)),
    )
}

/// Complete graph on `0..n`.
pub(crate) fn complete_graph(node_count: usize) -> Graph {
    build(
        node_count,
        (0..node_count).flat_map(|left| ((left + 1)..node_count).map(move |right| (left, right))),
    )
}

/// Star with hub `0` and leaves `1..n`.
pub(crate) fn star_graph(node_count: usize) -> Graph {
    build(node_count, (1..node_count).map(|leaf| (0, leaf)))
}

/// Counts connected components with a union-find, independent of the BFS
/// used by the engine.
pub(crate) fn count_components(graph: &Graph) -> usize {
    let position: BTreeMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(index, node)| (node, index))
        .collect();
    let mut set = DisjointSet::new(position.len());
    for edge in graph.edges() {
        set.union(position[&edge.source()], position[&edge.target()]);
    }
    set.components()
}
