//! Graph strategies for property tests.
//!
//! Graphs are built from a node count and a seeded edge density so shrinking
//! stays cheap and failures replay from the printed seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Edge, Graph};

const MAX_FIXTURE_NODES: usize = 24;

/// Parameters that fully determine a generated graph.
#[derive(Clone, Copy, Debug)]
pub(super) struct GraphFixture {
    pub(super) node_count: usize,
    pub(super) edge_probability: f64,
    pub(super) seed: u64,
}

impl GraphFixture {
    pub(super) fn build(self) -> Graph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = Graph::with_nodes(self.node_count);
        for left in 0..self.node_count {
            for right in (left + 1)..self.node_count {
                if rng.gen_bool(self.edge_probability)
                    && let Some(edge) = Edge::new(left, right)
                {
                    graph.insert_edge(edge);
                }
            }
        }
        graph
    }
}

/// Graphs from empty to moderately dense; sparse graphs dominate so
/// disconnected inputs are common.
pub(super) fn graph_fixture() -> impl Strategy<Value = GraphFixture> {
    (
        0..=MAX_FIXTURE_NODES,
        prop_oneof![3 => 0.0..0.15_f64, 1 => 0.15..=1.0_f64],
        any::<u64>(),
    )
        .prop_map(|(node_count, edge_probability, seed)| GraphFixture {
            node_count,
            edge_probability,
            seed,
        })
}

/// Feasible `(node_count, edge_count)` requests for generation.
pub(super) fn generate_request() -> impl Strategy<Value = (usize, usize)> {
    (0..=MAX_FIXTURE_NODES).prop_flat_map(|node_count| {
        let capacity = node_count * node_count.saturating_sub(1) / 2;
        (Just(node_count), 0..=capacity)
    })
}
