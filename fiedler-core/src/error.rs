//! Error types for the Fiedler graph engine.
//!
//! Every failure is returned to the caller as an [`EngineError`]. Variants
//! carry a stable [`EngineErrorCode`] for logs and metrics and fall into one
//! of three [`ErrorKind`] classes.

use std::fmt;

use thiserror::Error;

use crate::{graph::NodeId, operation::Operation};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => ($code:expr, $kind:ident)
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }

            /// Return the error class this code belongs to.
            #[must_use]
            pub const fn kind(self) -> ErrorKind {
                match self {
                    $(Self::$CodeVariant => ErrorKind::$kind,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }

            /// Return the error class of this error.
            #[must_use]
            pub const fn kind(&self) -> ErrorKind {
                self.code().kind()
            }
        }
    };
}

/// Broad classes of engine failures.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    InvalidArgument,
    /// The graph is too small for the requested operation.
    InvalidState,
    /// Edge augmentation found no eligible node pair.
    NoCandidate,
}

impl ErrorKind {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidState => "INVALID_STATE",
            Self::NoCandidate => "NO_CANDIDATE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by [`crate::GraphEngine`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EngineError {
    /// A count supplied as text was not a non-negative integer.
    #[error("`{field}` must be a non-negative integer (got `{raw}`)")]
    InvalidCount {
        /// Name of the offending input field.
        field: &'static str,
        /// Raw text supplied by the caller.
        raw: String,
    },
    /// More nodes were requested than the engine generates.
    #[error("cannot generate {node_count} nodes (at most {max})")]
    NodeCountOutOfRange {
        /// Requested node count.
        node_count: usize,
        /// Largest accepted node count.
        max: usize,
    },
    /// More edges were requested than a simple graph on the nodes can hold.
    #[error("cannot place {edge_count} edges on {node_count} nodes (at most {capacity})")]
    EdgeCountExceedsCapacity {
        /// Requested node count.
        node_count: usize,
        /// Requested edge count.
        edge_count: usize,
        /// Largest edge count a simple graph on `node_count` nodes admits.
        capacity: usize,
    },
    /// An edge joined a node to itself.
    #[error("edge ({node}, {node}) is a self-loop")]
    SelfLoop {
        /// The node on both ends of the edge.
        node: NodeId,
    },
    /// An edge referenced a node missing from the node set.
    #[error("edge references node {node}, which is not in the graph")]
    UnknownEndpoint {
        /// The missing node id.
        node: NodeId,
    },
    /// The graph has fewer nodes than the operation needs.
    #[error("{operation} requires at least {required} nodes (graph has {node_count})")]
    TooFewNodes {
        /// Operation that was refused.
        operation: Operation,
        /// Current node count.
        node_count: usize,
        /// Minimum node count for the operation.
        required: usize,
    },
    /// No pair of unconnected nodes with a finite distance exists.
    #[error("no unconnected node pair with a finite shortest path exists")]
    NoCandidate,
}

define_error_codes! {
    /// Stable codes describing [`EngineError`] variants.
    enum EngineErrorCode for EngineError {
        /// A count supplied as text was not a non-negative integer.
        InvalidCount => InvalidCount { .. } => ("ENGINE_INVALID_COUNT", InvalidArgument),
        /// More nodes were requested than the engine generates.
        NodeCountOutOfRange => NodeCountOutOfRange { .. }
            => ("ENGINE_NODE_COUNT_OUT_OF_RANGE", InvalidArgument),
        /// More edges were requested than fit on the nodes.
        EdgeCountExceedsCapacity => EdgeCountExceedsCapacity { .. }
            => ("ENGINE_EDGE_COUNT_EXCEEDS_CAPACITY", InvalidArgument),
        /// An edge joined a node to itself.
        SelfLoop => SelfLoop { .. } => ("ENGINE_SELF_LOOP", InvalidArgument),
        /// An edge referenced a node missing from the node set.
        UnknownEndpoint => UnknownEndpoint { .. } => ("ENGINE_UNKNOWN_ENDPOINT", InvalidArgument),
        /// The graph has fewer nodes than the operation needs.
        TooFewNodes => TooFewNodes { .. } => ("ENGINE_TOO_FEW_NODES", InvalidState),
        /// No eligible node pair exists.
        NoCandidate => NoCandidate => ("ENGINE_NO_CANDIDATE", NoCandidate),
    }
}

/// Convenient alias for results returned by the engine API.
pub type Result<T> = core::result::Result<T, EngineError>;
