#![forbid(unsafe_code)]

//! The display tree boundary.
//!
//! [`DisplayTree`] is everything the overlay needs from its host display
//! environment: element creation and destruction, tree edits, and
//! style/attribute/text assignment. [`Surface`](crate::Surface) is the
//! in-memory implementation; a DOM-backed implementation would translate
//! each call into the matching element API.

use crate::error::Result;
use crate::node::{NodeId, Style};

pub trait DisplayTree {
    /// The display root the overlay attaches to.
    fn root(&self) -> NodeId;

    /// Create a detached element with the given class list.
    fn create_element(&mut self, class: &str) -> NodeId;

    /// Append `child` as the last child of `parent`, moving it if attached
    /// elsewhere.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Insert `child` before `reference` under `parent`, or append when
    /// `reference` is `None`. Moves `child` if attached elsewhere.
    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()>;

    /// First child of `parent`, if any.
    fn first_child(&self, parent: NodeId) -> Result<Option<NodeId>>;

    /// Remove `node` from its parent. Detaching a detached node is a no-op.
    fn detach(&mut self, node: NodeId) -> Result<()>;

    /// Detach `node` and release it together with its whole subtree.
    fn destroy(&mut self, node: NodeId) -> Result<()>;

    /// Overwrite the style properties set in `style`.
    fn set_style(&mut self, node: NodeId, style: Style) -> Result<()>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    /// Whether `node` is alive (created and not destroyed).
    fn contains(&self, node: NodeId) -> bool;

    /// Whether `node` is reachable from [`root`](Self::root).
    fn is_attached(&self, node: NodeId) -> bool;

    /// Convenience: insert `child` as the first child of `parent`.
    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let first = self.first_child(parent)?;
        self.insert_before(parent, child, first)
    }
}
