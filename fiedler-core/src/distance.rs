//! All-pairs shortest-path lengths and farthest-pair search.
//!
//! Every edge has unit length, so one breadth-first sweep per source yields
//! exact hop counts. Nodes unreachable from a source have no entry in its
//! row. With the `parallel` feature the sweeps run on the Rayon pool; rows
//! are collected into ordered maps, so the table does not depend on
//! scheduling.

use std::collections::{BTreeMap, VecDeque};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::{Adjacency, Edge, Graph, NodeId};

/// Shortest-path hop counts between every pair of mutually reachable nodes.
///
/// # Examples
/// ```
/// use fiedler_core::{DistanceTable, Graph};
///
/// let graph = Graph::try_from_parts(0..4, [(0, 1), (1, 2)]).expect("valid graph");
/// let table = DistanceTable::compute(&graph);
/// assert_eq!(table.distance(0, 2), Some(2));
/// assert_eq!(table.distance(0, 3), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceTable {
    rows: BTreeMap<NodeId, BTreeMap<NodeId, usize>>,
}

impl DistanceTable {
    /// Runs one breadth-first sweep from every node of `graph`.
    #[must_use]
    pub fn compute(graph: &Graph) -> Self {
        let adjacency = graph.adjacency();
        let sources: Vec<NodeId> = graph.nodes().collect();

        #[cfg(feature = "parallel")]
        let rows = sources
            .par_iter()
            .map(|&source| (source, sweep(&adjacency, source)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rows = sources
            .iter()
            .map(|&source| (source, sweep(&adjacency, source)))
            .collect();

        Self { rows }
    }

    /// Returns the hop count from `from` to `to`, or `None` when no path
    /// exists.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        self.rows.get(&from)?.get(&to).copied()
    }

    /// Iterates the nodes reachable from `from` in ascending id order,
    /// including `from` itself at distance zero.
    pub fn reachable_from(&self, from: NodeId) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.rows
            .get(&from)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&node, &hops)| (node, hops)))
    }

    /// Returns the number of source rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn sweep(adjacency: &Adjacency, source: NodeId) -> BTreeMap<NodeId, usize> {
    let mut hops = BTreeMap::from([(source, 0_usize)]);
    let mut queue = VecDeque::from([(source, 0_usize)]);
    while let Some((node, depth)) = queue.pop_front() {
        let Some(neighbours) = adjacency.get(&node) else {
            continue;
        };
        let next_depth = depth.saturating_add(1);
        for &next in neighbours {
            if let std::collections::btree_map::Entry::Vacant(slot) = hops.entry(next) {
                slot.insert(next_depth);
                queue.push_back((next, next_depth));
            }
        }
    }
    hops
}

/// An unconnected node pair chosen for augmentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidatePair {
    /// The edge that would join the pair.
    pub edge: Edge,
    /// Shortest-path hop count between the pair before the edge is added.
    pub distance: usize,
}

/// Finds the non-adjacent node pair with the greatest finite distance.
///
/// Pairs are scanned with the outer loop over `u` and the inner loop over
/// `v > u`, both ascending; a later pair replaces the current best only when
/// strictly farther, so ties go to the first pair found. Unreachable pairs
/// are never candidates. Returns `None` when no pair qualifies.
#[must_use]
pub fn farthest_unlinked_pair(graph: &Graph, table: &DistanceTable) -> Option<CandidatePair> {
    let mut best: Option<CandidatePair> = None;
    for source in graph.nodes() {
        for (target, distance) in table.reachable_from(source) {
            if target <= source || graph.contains_edge(source, target) {
                continue;
            }
            if best.is_some_and(|current| distance <= current.distance) {
                continue;
            }
            best = Edge::new(source, target).map(|edge| CandidatePair { edge, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{complete_graph, cycle_graph, path_graph};

    fn pair(graph: &Graph) -> Option<((NodeId, NodeId), usize)> {
        let table = DistanceTable::compute(graph);
        farthest_unlinked_pair(graph, &table).map(|found| (found.edge.endpoints(), found.distance))
    }

    #[test]
    fn path_distances_equal_index_gaps() {
        let graph = path_graph(6);
        let table = DistanceTable::compute(&graph);
        assert_eq!(table.len(), 6);
        for u in 0..6 {
            for v in 0..6 {
                assert_eq!(table.distance(u, v), Some(u.abs_diff(v)));
            }
        }
    }

    #[test]
    fn empty_graph_has_empty_table() {
        let table = DistanceTable::compute(&Graph::new());
        assert!(table.is_empty());
        assert!(!DistanceTable::compute(&Graph::with_nodes(1)).is_empty());
    }

    #[test]
    fn unreachable_nodes_have_no_entry() {
        let graph = Graph::try_from_parts(0..4, [(0, 1), (2, 3)]).expect("valid graph");
        let table = DistanceTable::compute(&graph);
        assert_eq!(table.distance(0, 2), None);
        let reachable: Vec<_> = table.reachable_from(3).collect();
        assert_eq!(reachable, vec![(2, 1), (3, 0)]);
    }

    #[rstest]
    #[case::empty(Graph::new())]
    #[case::single(Graph::with_nodes(1))]
    #[case::isolated(Graph::with_nodes(4))]
    #[case::complete(complete_graph(5))]
    #[case::matching(Graph::try_from_parts(0..4, [(0, 1), (2, 3)]).expect("valid"))]
    fn no_candidate_when_every_pair_is_linked_or_unreachable(#[case] graph: Graph) {
        assert_eq!(pair(&graph), None);
    }

    #[test]
    fn picks_path_endpoints() {
        assert_eq!(pair(&path_graph(5)), Some(((0, 4), 4)));
    }

    #[test]
    fn ties_go_to_first_pair_in_scan_order() {
        // Opposite corners of a 6-cycle sit at distance 3: (0,3), (1,4), (2,5).
        assert_eq!(pair(&cycle_graph(6)), Some(((0, 3), 3)));
    }

    #[test]
    fn skips_isolated_nodes() {
        let graph = Graph::try_from_parts(0..4, [(0, 1), (1, 2)]).expect("valid graph");
        assert_eq!(pair(&graph), Some(((0, 2), 2)));
    }
}
