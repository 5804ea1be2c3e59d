//! Names of the engine operations, shared by errors, spans, and metrics.

use std::fmt;

/// Mutating operations exposed by [`crate::GraphEngine`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Replace the graph with a random simple graph.
    Generate,
    /// Replace the edge set with a minimum spanning forest.
    ReduceToMinimalConnectedStructure,
    /// Keep only the largest connected component.
    ReduceToLargestComponent,
    /// Connect the most distant unconnected node pair.
    AddMaxDistanceEdge,
}

impl Operation {
    /// Returns the stable label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::ReduceToMinimalConnectedStructure => "reduce_to_tree",
            Self::ReduceToLargestComponent => "reduce_to_largest_component",
            Self::AddMaxDistanceEdge => "add_max_distance_edge",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
