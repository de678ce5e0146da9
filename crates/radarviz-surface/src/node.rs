#![forbid(unsafe_code)]

//! Node handles and per-node state.

use std::collections::BTreeMap;
use std::fmt;

use radarviz_core::GeographyRect;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle to a node in a [`Surface`](crate::Surface).
///
/// Carries a generation so a handle to a destroyed node never aliases a
/// node later created in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Slot index inside the surface.
    #[inline]
    pub const fn slot(self) -> u32 {
        self.slot
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.slot, self.generation)
    }
}

/// Inline positioning of a node, in pixels.
///
/// Each property is optional: setting a style only overwrites the
/// properties that are `Some`, the way assigning `element.style.width`
/// leaves `height` alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

impl Style {
    /// All four properties from a rectangle.
    #[must_use]
    pub const fn rect(rect: GeographyRect) -> Self {
        Self {
            width: Some(rect.width),
            height: Some(rect.height),
            top: Some(rect.top),
            left: Some(rect.left),
        }
    }

    /// Width and height only.
    #[must_use]
    pub const fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            top: None,
            left: None,
        }
    }

    /// Height only.
    #[must_use]
    pub const fn height(height: f64) -> Self {
        Self {
            width: None,
            height: Some(height),
            top: None,
            left: None,
        }
    }

    /// Overwrite the properties set in `other`.
    pub fn merge(&mut self, other: Style) {
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.height.is_some() {
            self.height = other.height;
        }
        if other.top.is_some() {
            self.top = other.top;
        }
        if other.left.is_some() {
            self.left = other.left;
        }
    }

    /// The rectangle, if all four properties are set.
    #[must_use]
    pub fn as_rect(&self) -> Option<GeographyRect> {
        Some(GeographyRect::new(
            self.width?,
            self.height?,
            self.top?,
            self.left?,
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.top.is_none() && self.left.is_none()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = [
            ("width", self.width),
            ("height", self.height),
            ("top", self.top),
            ("left", self.left),
        ];
        let mut first = true;
        for (name, value) in props {
            let Some(value) = value else { continue };
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{name}:{value}px;")?;
            first = false;
        }
        Ok(())
    }
}

/// State of one live node.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) class: String,
    pub(crate) style: Style,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) text: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            ..Self::default()
        }
    }
}
