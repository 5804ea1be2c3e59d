//! Undirected simple graph storage.
//!
//! Nodes and edges live in ordered sets, so every traversal in the engine
//! visits node ids in ascending order. The documented tie-breaks for spanning
//! forests, components, and edge augmentation rely on that ordering.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EngineError, Result};

/// Identifier of a graph node.
pub type NodeId = usize;

/// Neighbour lists keyed by node, each sorted ascending.
pub(crate) type Adjacency = BTreeMap<NodeId, Vec<NodeId>>;

/// An undirected edge in canonical form (`source < target`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// Canonicalises `(left, right)` into an edge.
    ///
    /// Returns `None` for a self-loop.
    ///
    /// # Examples
    /// ```
    /// use fiedler_core::Edge;
    ///
    /// let edge = Edge::new(4, 1).expect("distinct endpoints");
    /// assert_eq!(edge.endpoints(), (1, 4));
    /// assert!(Edge::new(2, 2).is_none());
    /// ```
    #[must_use]
    pub fn new(left: NodeId, right: NodeId) -> Option<Self> {
        match left.cmp(&right) {
            std::cmp::Ordering::Less => Some(Self {
                source: left,
                target: right,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                source: right,
                target: left,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> NodeId { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> NodeId { self.target }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn endpoints(&self) -> (NodeId, NodeId) { (self.source, self.target) }
}

/// A mutable undirected graph without self-loops or parallel edges.
///
/// Every edge endpoint is guaranteed to be present in the node set.
///
/// # Examples
/// ```
/// use fiedler_core::Graph;
///
/// let graph = Graph::try_from_parts(0..4, [(0, 1), (2, 1)]).expect("valid graph");
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(1, 2));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with isolated nodes `0..node_count`.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).collect(),
            edges: BTreeSet::new(),
        }
    }

    /// Builds a graph from explicit nodes and edges.
    ///
    /// Duplicate nodes and edges (in either orientation) collapse.
    ///
    /// # Errors
    /// Returns [`EngineError::SelfLoop`] when an edge joins a node to itself
    /// and [`EngineError::UnknownEndpoint`] when an edge references a node
    /// missing from `nodes`.
    pub fn try_from_parts(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self> {
        let mut graph = Self {
            nodes: nodes.into_iter().collect(),
            edges: BTreeSet::new(),
        };
        for (left, right) in edges {
            graph.try_insert_edge(left, right)?;
        }
        Ok(graph)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Iterates edges in lexicographic `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Returns `true` when `node` is present.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Returns `true` when an edge joins `left` and `right`.
    #[must_use]
    pub fn contains_edge(&self, left: NodeId, right: NodeId) -> bool {
        Edge::new(left, right).is_some_and(|edge| self.edges.contains(&edge))
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Returns `false` when the edge was already present.
    ///
    /// # Errors
    /// Returns [`EngineError::SelfLoop`] or [`EngineError::UnknownEndpoint`]
    /// when the edge would break the graph invariants.
    pub fn try_insert_edge(&mut self, left: NodeId, right: NodeId) -> Result<bool> {
        let edge = Edge::new(left, right).ok_or(EngineError::SelfLoop { node: left })?;
        for node in [edge.source, edge.target] {
            if !self.nodes.contains(&node) {
                return Err(EngineError::UnknownEndpoint { node });
            }
        }
        Ok(self.edges.insert(edge))
    }

    /// Inserts an edge whose endpoints the caller already knows are present.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        debug_assert!(self.nodes.contains(&edge.source) && self.nodes.contains(&edge.target));
        self.edges.insert(edge)
    }

    /// Builds sorted neighbour lists for every node, isolated nodes included.
    pub(crate) fn adjacency(&self) -> Adjacency {
        let mut adjacency: Adjacency = self.nodes.iter().map(|&node| (node, Vec::new())).collect();
        for edge in &self.edges {
            if let Some(neighbours) = adjacency.get_mut(&edge.source) {
                neighbours.push(edge.target);
            }
            if let Some(neighbours) = adjacency.get_mut(&edge.target) {
                neighbours.push(edge.source);
            }
        }
        for neighbours in adjacency.values_mut() {
            neighbours.sort_unstable();
        }
        adjacency
    }

    /// Returns the subgraph induced by `keep`.
    ///
    /// Ids in `keep` that are not in the graph are ignored.
    #[must_use]
    pub fn induced_subgraph(&self, keep: &BTreeSet<NodeId>) -> Self {
        Self {
            nodes: self.nodes.intersection(keep).copied().collect(),
            edges: self
                .edges
                .iter()
                .filter(|edge| keep.contains(&edge.source) && keep.contains(&edge.target))
                .copied()
                .collect(),
        }
    }

    /// Returns a graph with the same nodes and only the given edges.
    pub(crate) fn with_edges(&self, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self {
            nodes: self.nodes.clone(),
            edges: BTreeSet::new(),
        };
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Copies the node and edge sets into a detached [`GraphSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.iter().map(Edge::endpoints).collect(),
        }
    }
}

/// Read-only copy of a graph for rendering layers.
///
/// Mutating a snapshot never affects the engine it was taken from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GraphSnapshot {
    /// Node ids in ascending order.
    pub nodes: BTreeSet<NodeId>,
    /// Edges as `(source, target)` pairs with `source < target`.
    pub edges: BTreeSet<(NodeId, NodeId)>,
}
