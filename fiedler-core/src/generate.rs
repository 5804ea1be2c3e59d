//! Random simple graph generation by rejection sampling.

use rand::Rng;

use crate::{
    error::{EngineError, Result},
    graph::{Edge, Graph},
};

/// Largest node count [`random_graph`] accepts.
///
/// Requests above it are rejected before any node storage is allocated. The
/// bound also keeps the all-pairs distance table and the dense Laplacian
/// used by later operations within a few tens of megabytes.
pub const MAX_NODES: usize = 2048;

/// Returns the largest edge count a simple graph on `node_count` nodes holds.
///
/// Returns `None` when `node_count * (node_count - 1)` overflows `usize`, in
/// which case every `usize` edge count fits.
#[must_use]
pub fn edge_capacity(node_count: usize) -> Option<usize> {
    node_count
        .checked_mul(node_count.saturating_sub(1))
        .map(|pairs| pairs / 2)
}

/// Builds a random simple graph on nodes `0..node_count` with exactly
/// `edge_count` distinct edges.
///
/// Unordered node pairs are drawn uniformly; self-pairs and pairs already
/// present are rejected and redrawn.
///
/// # Errors
/// Returns [`EngineError::NodeCountOutOfRange`] when `node_count` exceeds
/// [`MAX_NODES`] and [`EngineError::EdgeCountExceedsCapacity`] when `edge_count`
/// exceeds `node_count * (node_count - 1) / 2`, since sampling would never
/// terminate.
///
/// # Examples
/// ```
/// use fiedler_core::random_graph;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = random_graph(6, 9, &mut rng).expect("9 edges fit on 6 nodes");
/// assert_eq!(graph.node_count(), 6);
/// assert_eq!(graph.edge_count(), 9);
/// ```
pub fn random_graph<R: Rng + ?Sized>(
    node_count: usize,
    edge_count: usize,
    rng: &mut R,
) -> Result<Graph> {
    if node_count > MAX_NODES {
        return Err(EngineError::NodeCountOutOfRange {
            node_count,
            max: MAX_NODES,
        });
    }
    if let Some(capacity) = edge_capacity(node_count)
        && edge_count > capacity
    {
        return Err(EngineError::EdgeCountExceedsCapacity {
            node_count,
            edge_count,
            capacity,
        });
    }

    let mut graph = Graph::with_nodes(node_count);
    let mut rejected = 0_u64;
    while graph.edge_count() < edge_count {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        let accepted = Edge::new(left, right).is_some_and(|edge| graph.insert_edge(edge));
        if !accepted {
            rejected = rejected.saturating_add(1);
        }
    }
    tracing::debug!(node_count, edge_count, rejected, "sampled random graph");
    Ok(graph)
}
