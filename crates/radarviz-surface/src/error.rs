#![forbid(unsafe_code)]

//! Display tree errors.

use crate::node::NodeId;

/// Failure of a display tree operation.
///
/// These only arise from misuse of node handles (stale ids, wrong parent).
/// The overlay never produces them against a well-formed tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The node was never created, or has been destroyed.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
    /// The reference node is not a child of the given parent.
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    /// Attaching would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },
    /// The root cannot be attached, detached, or destroyed.
    #[error("the root node cannot be moved or destroyed")]
    RootNode,
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
