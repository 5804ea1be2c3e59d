//! Brute-force reference implementations used as property-test oracles.

use std::collections::BTreeMap;

use crate::graph::{Graph, NodeId};

/// All-pairs hop counts by Floyd-Warshall; `None` marks unreachable pairs.
pub(super) fn floyd_warshall(graph: &Graph) -> BTreeMap<(NodeId, NodeId), Option<usize>> {
    let nodes: Vec<NodeId> = graph.nodes().collect();
    let mut table = BTreeMap::new();
    for &u in &nodes {
        for &v in &nodes {
            let hops = if u == v {
                Some(0)
            } else if graph.contains_edge(u, v) {
                Some(1)
            } else {
                None
            };
            table.insert((u, v), hops);
        }
    }
    for &via in &nodes {
        for &u in &nodes {
            for &v in &nodes {
                let through = match (table[&(u, via)], table[&(via, v)]) {
                    (Some(first), Some(second)) => Some(first + second),
                    _ => None,
                };
                let current = table[&(u, v)];
                if let Some(candidate) = through
                    && current.is_none_or(|known| candidate < known)
                {
                    table.insert((u, v), Some(candidate));
                }
            }
        }
    }
    table
}

/// Largest finite distance between non-adjacent distinct nodes, if any.
pub(super) fn max_unlinked_distance(graph: &Graph) -> Option<usize> {
    floyd_warshall(graph)
        .into_iter()
        .filter(|&((u, v), _)| u < v && !graph.contains_edge(u, v))
        .filter_map(|(_, hops)| hops)
        .max()
}
