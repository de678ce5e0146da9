#![forbid(unsafe_code)]

//! In-memory display tree.
//!
//! `Surface` keeps nodes in a slot vector with a free list, so destroyed
//! slots are reused without growing the vector. Each slot carries a
//! generation that is bumped on release; stale [`NodeId`]s are rejected with
//! [`SurfaceError::UnknownNode`].
//!
//! # Usage
//!
//! ```
//! use radarviz_surface::{DisplayTree, Style, Surface};
//!
//! let mut surface = Surface::new();
//! let root = surface.root();
//! let strip = surface.create_element("strip");
//! surface.append_child(root, strip).unwrap();
//! surface.set_style(strip, Style::size(40.0, 10.0)).unwrap();
//! assert!(surface.is_attached(strip));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{Result, SurfaceError};
use crate::node::{Node, NodeId, Style};
use crate::snapshot::NodeSnapshot;
use crate::tree::DisplayTree;

/// Class of the root node.
pub const ROOT_CLASS: &str = "body";

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Retained display tree owned by the caller.
#[derive(Debug, Clone)]
pub struct Surface {
    slots: Vec<Slot>,
    /// Reusable slots from destroyed nodes.
    free_list: Vec<u32>,
    root: NodeId,
}

impl Surface {
    /// Create a surface holding only the root node.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node::new(ROOT_CLASS)),
            }],
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
        }
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    /// A surface always holds its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of slots ever allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.slots
            .get(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(SurfaceError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.slots
            .get_mut(id.slot as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(SurfaceError::UnknownNode(id))
    }

    pub fn class(&self, id: NodeId) -> Result<&str> {
        Ok(self.node(id)?.class.as_str())
    }

    pub fn style(&self, id: NodeId) -> Result<Style> {
        Ok(self.node(id)?.style)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.node(id)?.attrs.get(name).map(String::as_str))
    }

    pub fn text(&self, id: NodeId) -> Result<Option<&str>> {
        Ok(self.node(id)?.text.as_deref())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children.as_slice())
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.node(current).ok().and_then(|n| n.parent);
        }
        false
    }

    fn unlink(&mut self, id: NodeId) -> Result<()> {
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|child| *child != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    fn release(&mut self, id: NodeId) {
        let Some(slot) = self.slots.get_mut(id.slot as usize) else {
            return;
        };
        if slot.generation != id.generation {
            return;
        }
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.slot);
        for child in node.children {
            self.release(child);
        }
    }

    /// Serializable copy of the subtree rooted at `id`.
    pub fn snapshot(&self, id: NodeId) -> Result<NodeSnapshot> {
        let node = self.node(id)?;
        let children = node
            .children
            .iter()
            .map(|child| self.snapshot(*child))
            .collect::<Result<Vec<_>>>()?;
        Ok(NodeSnapshot {
            class: node.class.clone(),
            style: node.style,
            attrs: node.attrs.clone(),
            text: node.text.clone(),
            children,
        })
    }

    /// Deterministic indented text rendering of the subtree rooted at `id`.
    pub fn dump(&self, id: NodeId) -> Result<String> {
        let mut out = String::new();
        self.dump_into(id, 0, &mut out)?;
        Ok(out)
    }

    fn dump_into(&self, id: NodeId, depth: usize, out: &mut String) -> Result<()> {
        let node = self.node(id)?;
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = write!(out, "<{}>", node.class);
        if !node.style.is_empty() {
            let _ = write!(out, " style=\"{}\"", node.style);
        }
        for (name, value) in &node.attrs {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if let Some(text) = &node.text {
            let _ = write!(out, " {text:?}");
        }
        out.push('\n');
        for child in &node.children {
            self.dump_into(*child, depth + 1, out)?;
        }
        Ok(())
    }

    /// Attribute map of a node, for bulk inspection.
    pub fn attributes(&self, id: NodeId) -> Result<&BTreeMap<String, String>> {
        Ok(&self.node(id)?.attrs)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayTree for Surface {
    #[inline]
    fn root(&self) -> NodeId {
        self.root
    }

    fn create_element(&mut self, class: &str) -> NodeId {
        let node = Some(Node::new(class));
        let id = if let Some(slot) = self.free_list.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.node = node;
            NodeId::new(slot, entry.generation)
        } else {
            let slot = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node,
            });
            NodeId::new(slot, 0)
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %id, class, "element created");
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_before(parent, child, None)
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if child == self.root {
            return Err(SurfaceError::RootNode);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SurfaceError::CycleDetected { parent, child });
        }
        if let Some(reference) = reference {
            if self.node(reference)?.parent != Some(parent) {
                return Err(SurfaceError::NotAChild {
                    parent,
                    child: reference,
                });
            }
            if reference == child {
                return Ok(());
            }
        }

        self.unlink(child)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let at = reference
            .and_then(|reference| siblings.iter().position(|id| *id == reference))
            .unwrap_or(siblings.len());
        siblings.insert(at, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn first_child(&self, parent: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(parent)?.children.first().copied())
    }

    fn detach(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(SurfaceError::RootNode);
        }
        self.unlink(node)
    }

    fn destroy(&mut self, node: NodeId) -> Result<()> {
        self.detach(node)?;
        self.release(node);
        #[cfg(feature = "tracing")]
        tracing::trace!(node = %node, "element destroyed");
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, style: Style) -> Result<()> {
        self.node_mut(node)?.style.merge(style);
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let attrs = &mut self.node_mut(node)?.attrs;
        if attrs.get(name).map(String::as_str) != Some(value) {
            attrs.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        let current = &mut self.node_mut(node)?.text;
        if current.as_deref() != Some(text) {
            *current = Some(text.to_string());
        }
        Ok(())
    }

    fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_ancestor_or_self(self.root, node)
    }
}
