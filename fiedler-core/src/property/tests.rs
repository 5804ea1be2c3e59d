//! Property runners for generation, reduction, and augmentation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::components::{connected_components, is_connected};
use crate::engine::GraphEngine;
use crate::error::{EngineError, ErrorKind};
use crate::spectral::algebraic_connectivity;
use crate::test_utils::{count_components, suite_proptest_config};

use super::oracle::max_unlinked_distance;
use super::strategies::{GraphFixture, generate_request, graph_fixture};

fn engine_for(fixture: GraphFixture) -> GraphEngine {
    GraphEngine::from_parts(fixture.build(), SmallRng::seed_from_u64(fixture.seed))
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn generate_produces_exact_simple_graphs(request in generate_request(), seed in any::<u64>()) {
        let (node_count, edge_count) = request;
        let mut engine = GraphEngine::from_parts(Default::default(), SmallRng::seed_from_u64(seed));
        engine.generate(node_count, edge_count).expect("request is feasible");

        let graph = engine.graph();
        prop_assert_eq!(graph.node_count(), node_count);
        prop_assert_eq!(graph.edge_count(), edge_count);
        for edge in graph.edges() {
            prop_assert!(edge.source() < edge.target());
            prop_assert!(edge.target() < node_count);
        }
    }

    #[test]
    fn generate_rejects_infeasible_requests_without_mutation(
        fixture in graph_fixture(),
        extra in 1_usize..8,
    ) {
        let mut engine = engine_for(fixture);
        let before = engine.graph().clone();
        let node_count = before.node_count();
        let capacity = node_count * node_count.saturating_sub(1) / 2;

        let err = engine.generate(node_count, capacity + extra).expect_err("request is infeasible");
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(engine.graph(), &before);
    }

    #[test]
    fn spanning_forest_keeps_nodes_and_components(fixture in graph_fixture()) {
        let mut engine = engine_for(fixture);
        let before = engine.graph().clone();
        let result = engine.reduce_to_minimal_connected_structure();
        if before.node_count() < 2 {
            prop_assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::InvalidState));
            prop_assert_eq!(engine.graph(), &before);
            return Ok(());
        }
        prop_assert!(result.is_ok());

        let after = engine.graph();
        let components = count_components(&before);
        prop_assert_eq!(after.nodes().collect::<Vec<_>>(), before.nodes().collect::<Vec<_>>());
        prop_assert_eq!(after.edge_count(), before.node_count() - components);
        prop_assert_eq!(count_components(after), components);
        prop_assert!(after.edges().all(|edge| before.contains_edge(edge.source(), edge.target())));
    }

    #[test]
    fn largest_component_is_maximal_connected_and_idempotent(fixture in graph_fixture()) {
        let mut engine = engine_for(fixture);
        let before = engine.graph().clone();
        if before.node_count() < 2 {
            prop_assert!(engine.reduce_to_largest_component().is_err());
            return Ok(());
        }
        engine.reduce_to_largest_component().expect("graph has at least two nodes");

        let once = engine.graph().clone();
        prop_assert!(is_connected(&once));
        for component in connected_components(&before) {
            prop_assert!(once.node_count() >= component.len());
        }
        prop_assert_eq!(once.edge_count(), before.induced_subgraph(&once.nodes().collect()).edge_count());

        if once.node_count() >= 2 {
            engine.reduce_to_largest_component().expect("component has at least two nodes");
            prop_assert_eq!(engine.graph(), &once);
        }
    }

    #[test]
    fn augmentation_matches_brute_force_distance(fixture in graph_fixture()) {
        let mut engine = engine_for(fixture);
        let before = engine.graph().clone();
        let expected = max_unlinked_distance(&before);

        match (engine.add_max_distance_edge(), expected) {
            (Ok(addition), Some(distance)) => {
                let (source, target) = addition.edge().endpoints();
                prop_assert_eq!(addition.distance(), distance);
                prop_assert!(!before.contains_edge(source, target));
                prop_assert!(engine.graph().contains_edge(source, target));
                prop_assert_eq!(engine.graph().edge_count(), before.edge_count() + 1);
                prop_assert!(addition.after() + 1e-9 >= addition.before());
                prop_assert!((addition.before() - algebraic_connectivity(&before)).abs() < 1e-9);
            }
            (Err(EngineError::NoCandidate), None) => {
                prop_assert_eq!(engine.graph(), &before);
            }
            (outcome, expected) => {
                prop_assert!(false, "outcome {:?} disagrees with oracle {:?}", outcome, expected);
            }
        }
    }
}
