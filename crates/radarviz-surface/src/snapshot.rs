#![forbid(unsafe_code)]

//! Owned, serializable copies of a display subtree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::Style;

/// A node and its descendants at a point in time.
///
/// Attributes are kept in a `BTreeMap`, so equal trees serialize to equal
/// bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub class: String,
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    /// Total number of nodes in this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first search for nodes whose class list contains `class`.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a NodeSnapshot> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a NodeSnapshot>) {
        if self.class.split_whitespace().any(|c| c == class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayTree, Surface};
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_mirrors_tree() {
        let mut surface = Surface::new();
        let root = surface.root();
        let wrapper = surface.create_element("wrapper");
        let sat = surface.create_element("satellite horizontal");
        surface.append_child(root, wrapper).unwrap();
        surface.append_child(wrapper, sat).unwrap();
        surface.set_text(sat, "4").unwrap();
        surface.set_style(wrapper, Style::height(63.0)).unwrap();

        let snap = surface.snapshot(wrapper).unwrap();
        assert_eq!(snap.node_count(), 2);
        assert_eq!(
            snap,
            NodeSnapshot {
                class: "wrapper".into(),
                style: Style::height(63.0),
                children: vec![NodeSnapshot {
                    class: "satellite horizontal".into(),
                    text: Some("4".into()),
                    ..NodeSnapshot::default()
                }],
                ..NodeSnapshot::default()
            }
        );
        assert_eq!(snap.find_by_class("horizontal").len(), 1);
        assert!(snap.find_by_class("horiz").is_empty());
    }

    #[test]
    fn json_omits_empty_fields() {
        let snap = NodeSnapshot {
            class: "strip".into(),
            style: Style::height(10.0),
            ..NodeSnapshot::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert_eq!(json, r#"{"class":"strip","style":{"height":10.0}}"#);
        let back: NodeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
