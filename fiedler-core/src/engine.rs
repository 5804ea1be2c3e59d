//! The graph engine: one owned graph and the operations that transform it.
//!
//! Each mutating operation computes its replacement graph first and swaps it
//! in only on success, so a failed call leaves the graph untouched and
//! observers never see a half-built graph. Methods take `&mut self`; a host
//! that shares an engine across threads wraps it in a single mutex.

use rand::rngs::SmallRng;
use tracing::{info, instrument, warn};

use crate::{
    components::largest_component,
    distance::{DistanceTable, farthest_unlinked_pair},
    error::{EngineError, Result},
    generate::random_graph,
    graph::{Edge, Graph, GraphSnapshot},
    input::parse_count,
    mst::minimum_spanning_forest,
    operation::Operation,
    spectral::algebraic_connectivity,
};

/// Node count below which reductions are refused.
pub const MIN_REDUCIBLE_NODES: usize = 2;

/// Outcome of [`GraphEngine::add_max_distance_edge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeAddition {
    edge: Edge,
    distance: usize,
    before: f64,
    after: f64,
}

impl EdgeAddition {
    /// Returns the edge that was added.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge(&self) -> Edge { self.edge }

    /// Returns the shortest-path distance the edge replaced.
    #[must_use]
    #[rustfmt::skip]
    pub fn distance(&self) -> usize { self.distance }

    /// Returns the algebraic connectivity before the addition.
    #[must_use]
    #[rustfmt::skip]
    pub fn before(&self) -> f64 { self.before }

    /// Returns the algebraic connectivity after the addition.
    #[must_use]
    #[rustfmt::skip]
    pub fn after(&self) -> f64 { self.after }

    /// Returns `after - before`.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }
}

/// Holds a mutable undirected graph and exposes the engine operations.
///
/// # Examples
/// ```
/// use fiedler_core::EngineBuilder;
///
/// let mut engine = EngineBuilder::new().with_seed(11).build();
/// engine.generate(12, 14).expect("14 edges fit on 12 nodes");
/// engine.reduce_to_largest_component().expect("graph has 12 nodes");
/// assert!(engine.graph().node_count() <= 12);
/// ```
#[derive(Clone, Debug)]
pub struct GraphEngine {
    graph: Graph,
    rng: SmallRng,
}

impl Default for GraphEngine {
    fn default() -> Self {
        crate::builder::EngineBuilder::new().build()
    }
}

impl GraphEngine {
    pub(crate) fn from_parts(graph: Graph, rng: SmallRng) -> Self {
        Self { graph, rng }
    }

    /// Creates an engine with an empty graph and an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the current graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Returns a detached copy of the node and edge sets.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }

    /// Returns the algebraic connectivity of the current graph.
    #[must_use]
    pub fn algebraic_connectivity(&self) -> f64 {
        algebraic_connectivity(&self.graph)
    }

    /// Replaces the graph with a random simple graph on `0..node_count` with
    /// exactly `edge_count` edges.
    ///
    /// # Errors
    /// Returns [`EngineError::NodeCountOutOfRange`] above
    /// [`crate::MAX_NODES`] nodes and [`EngineError::EdgeCountExceedsCapacity`]
    /// when the edges cannot fit; the current graph is kept.
    #[instrument(name = "engine.generate", skip(self))]
    pub fn generate(&mut self, node_count: usize, edge_count: usize) -> Result<()> {
        let graph = observe(
            Operation::Generate,
            random_graph(node_count, edge_count, &mut self.rng),
        )?;
        self.graph = graph;
        info!(node_count, edge_count, "generated graph");
        Ok(())
    }

    /// Parses free-text counts and then behaves like [`Self::generate`].
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidCount`] when either input is not a
    /// non-negative integer, plus the errors of [`Self::generate`].
    pub fn generate_from_input(&mut self, nodes: &str, edges: &str) -> Result<()> {
        let counts = parse_count("nodes", nodes).and_then(|node_count| {
            parse_count("edges", edges).map(|edge_count| (node_count, edge_count))
        });
        let (node_count, edge_count) = observe(Operation::Generate, counts)?;
        self.generate(node_count, edge_count)
    }

    /// Replaces the edge set with a minimum spanning forest.
    ///
    /// Every node is kept; the graph ends with `node_count - components`
    /// edges.
    ///
    /// # Errors
    /// Returns [`EngineError::TooFewNodes`] when the graph has fewer than two
    /// nodes.
    #[instrument(
        name = "engine.reduce_to_tree",
        skip(self),
        fields(node_count = self.graph.node_count(), edge_count = self.graph.edge_count()),
    )]
    pub fn reduce_to_minimal_connected_structure(&mut self) -> Result<()> {
        let operation = Operation::ReduceToMinimalConnectedStructure;
        observe(operation, self.require_reducible(operation))?;
        let forest = minimum_spanning_forest(&self.graph);
        let removed = self.graph.edge_count() - forest.edges().len();
        self.graph = self.graph.with_edges(forest.edges().iter().copied());
        info!(
            components = forest.component_count(),
            removed, "reduced graph to minimum spanning forest"
        );
        Ok(())
    }

    /// Replaces the graph with the subgraph induced by its largest connected
    /// component.
    ///
    /// Ties in size go to the component holding the smallest node id.
    ///
    /// # Errors
    /// Returns [`EngineError::TooFewNodes`] when the graph has fewer than two
    /// nodes.
    #[instrument(
        name = "engine.reduce_to_largest_component",
        skip(self),
        fields(node_count = self.graph.node_count(), edge_count = self.graph.edge_count()),
    )]
    pub fn reduce_to_largest_component(&mut self) -> Result<()> {
        let operation = Operation::ReduceToLargestComponent;
        observe(operation, self.require_reducible(operation))?;
        if let Some(keep) = largest_component(&self.graph) {
            let discarded = self.graph.node_count() - keep.len();
            self.graph = self.graph.induced_subgraph(&keep);
            info!(
                kept = self.graph.node_count(),
                discarded, "reduced graph to largest component"
            );
        }
        Ok(())
    }

    /// Connects the unconnected node pair with the greatest finite
    /// shortest-path distance.
    ///
    /// Ties go to the first pair in ascending `(u, v)` scan order.
    ///
    /// # Errors
    /// Returns [`EngineError::NoCandidate`] when no unconnected pair has a
    /// finite distance (complete graph, fewer than two nodes, or only
    /// unreachable pairs left).
    #[instrument(
        name = "engine.add_max_distance_edge",
        skip(self),
        fields(node_count = self.graph.node_count(), edge_count = self.graph.edge_count()),
    )]
    pub fn add_max_distance_edge(&mut self) -> Result<EdgeAddition> {
        let table = DistanceTable::compute(&self.graph);
        let candidate = observe(
            Operation::AddMaxDistanceEdge,
            farthest_unlinked_pair(&self.graph, &table).ok_or(EngineError::NoCandidate),
        )?;

        let before = algebraic_connectivity(&self.graph);
        self.graph.insert_edge(candidate.edge);
        let after = algebraic_connectivity(&self.graph);

        let (source, target) = candidate.edge.endpoints();
        info!(
            source,
            target,
            distance = candidate.distance,
            before,
            after,
            "added max-distance edge"
        );
        Ok(EdgeAddition {
            edge: candidate.edge,
            distance: candidate.distance,
            before,
            after,
        })
    }

    fn require_reducible(&self, operation: Operation) -> Result<()> {
        let node_count = self.graph.node_count();
        if node_count < MIN_REDUCIBLE_NODES {
            return Err(EngineError::TooFewNodes {
                operation,
                node_count,
                required: MIN_REDUCIBLE_NODES,
            });
        }
        Ok(())
    }
}

/// Records the outcome of an operation for logs and, with the `metrics`
/// feature, counters.
fn observe<T>(operation: Operation, result: Result<T>) -> Result<T> {
    #[cfg(feature = "metrics")]
    {
        metrics::counter!("engine_operations_total", "operation" => operation.as_str())
            .increment(1);
        if let Err(error) = &result {
            metrics::counter!(
                "engine_operation_errors_total",
                "operation" => operation.as_str(),
                "code" => error.code().as_str()
            )
            .increment(1);
        }
    }

    if let Err(error) = &result {
        warn!(
            operation = operation.as_str(),
            code = error.code().as_str(),
            kind = error.kind().as_str(),
            %error,
            "operation rejected"
        );
    }
    result
}
