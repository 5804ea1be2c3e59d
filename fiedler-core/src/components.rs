//! Connected component discovery.
//!
//! Components are discovered by breadth-first search seeded from unvisited
//! nodes in ascending id order, so the first component always contains the
//! smallest node id. [`largest_component`] breaks size ties in favour of the
//! component discovered first.

use std::collections::{BTreeSet, VecDeque};

use crate::graph::{Adjacency, Graph, NodeId};

/// Returns the connected components of `graph` in discovery order.
///
/// # Examples
/// ```
/// use fiedler_core::{Graph, connected_components};
///
/// let graph = Graph::try_from_parts(0..5, [(3, 4), (0, 1)]).expect("valid graph");
/// let components = connected_components(&graph);
/// assert_eq!(components.len(), 3);
/// assert_eq!(components[0].iter().copied().collect::<Vec<_>>(), vec![0, 1]);
/// assert_eq!(components[1].iter().copied().collect::<Vec<_>>(), vec![2]);
/// ```
#[must_use]
pub fn connected_components(graph: &Graph) -> Vec<BTreeSet<NodeId>> {
    let adjacency = graph.adjacency();
    let mut visited = BTreeSet::new();
    let mut components = Vec::new();

    for seed in graph.nodes() {
        if visited.contains(&seed) {
            continue;
        }
        let component = explore(&adjacency, seed);
        visited.extend(component.iter().copied());
        components.push(component);
    }
    components
}

fn explore(adjacency: &Adjacency, seed: NodeId) -> BTreeSet<NodeId> {
    let mut component = BTreeSet::from([seed]);
    let mut queue = VecDeque::from([seed]);
    while let Some(node) = queue.pop_front() {
        let Some(neighbours) = adjacency.get(&node) else {
            continue;
        };
        for &next in neighbours {
            if component.insert(next) {
                queue.push_back(next);
            }
        }
    }
    component
}

/// Returns the node set of the largest connected component.
///
/// Returns `None` for an empty graph. When several components share the
/// maximum size, the one discovered first (holding the smallest node id among
/// them) is returned.
///
/// # Examples
/// ```
/// use fiedler_core::{Graph, largest_component};
///
/// let graph = Graph::try_from_parts(0..6, [(4, 5), (0, 1), (2, 3), (3, 4)]).expect("valid graph");
/// let largest = largest_component(&graph).expect("graph is not empty");
/// assert_eq!(largest.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
#[must_use]
pub fn largest_component(graph: &Graph) -> Option<BTreeSet<NodeId>> {
    let mut best: Option<BTreeSet<NodeId>> = None;
    for component in connected_components(graph) {
        let larger = best
            .as_ref()
            .is_none_or(|current| component.len() > current.len());
        if larger {
            best = Some(component);
        }
    }
    best
}

/// Returns `true` when every node is reachable from every other node.
///
/// The empty graph counts as connected.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    connected_components(graph).len() <= 1
}
