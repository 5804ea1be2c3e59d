//! Minimum spanning forest construction.
//!
//! Edges are unit-weight, so Kruskal's global sort collapses to the graph's
//! canonical `(source, target)` edge order. An edge is kept when it joins two
//! different trees; the first edge to do so wins, which makes the forest
//! stable for a given graph.

mod union_find;

use std::collections::BTreeMap;

use crate::graph::{Edge, Graph, NodeId};

pub(crate) use self::union_find::DisjointSet;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in ascending canonical order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// The forest has exactly `node_count - component_count` edges and covers
/// every node; nodes are never dropped.
///
/// # Examples
/// ```
/// use fiedler_core::{Graph, minimum_spanning_forest};
///
/// let triangle = Graph::try_from_parts(0..3, [(0, 1), (1, 2), (0, 2)]).expect("valid graph");
/// let forest = minimum_spanning_forest(&triangle);
/// assert!(forest.is_tree());
/// let kept: Vec<_> = forest.edges().iter().map(|edge| edge.endpoints()).collect();
/// assert_eq!(kept, vec![(0, 1), (0, 2)]);
/// ```
#[must_use]
pub fn minimum_spanning_forest(graph: &Graph) -> SpanningForest {
    let position: BTreeMap<NodeId, usize> = graph
        .nodes()
        .enumerate()
        .map(|(index, node)| (node, index))
        .collect();
    let node_count = position.len();
    let mut union_find = DisjointSet::new(node_count);
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));

    for edge in graph.edges() {
        let (Some(&left), Some(&right)) =
            (position.get(&edge.source()), position.get(&edge.target()))
        else {
            continue;
        };
        if union_find.union(left, right) {
            edges.push(edge);
            if union_find.components() == 1 {
                break;
            }
        }
    }

    SpanningForest {
        edges,
        component_count: union_find.components(),
    }
}
