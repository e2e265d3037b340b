//! The immutable intermediate representation shared by every renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::AttrValue;

/// Attribute map of a single node. Keys are unique and keep their first insertion position.
pub type Attributes = IndexMap<String, AttrValue>;

/// How a renderer obtains the element a node refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Address an element that already exists, relative to the parent or to the document root.
    Select,
    /// Create a new element as the last child of the parent.
    Append,
}

/// One frozen node of an element tree.
///
/// A `Sel` owns all of its attributes and children and exposes them read-only, so a tree cannot
/// change once it has been produced by [`serialize`](crate::serialize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sel {
    selector: String,
    action: Action,
    #[serde(default)]
    attrs: Attributes,
    #[serde(default)]
    children: Vec<Sel>,
}

impl Sel {
    /// Assembles a node from its parts.
    ///
    /// Trees built this way may use [`Action::Append`] at the root. Renderers that need a parent
    /// reject such a root at render time.
    #[must_use]
    pub fn new(
        selector: impl Into<String>,
        action: Action,
        attrs: Attributes,
        children: Vec<Self>,
    ) -> Self {
        Self {
            selector: selector.into(),
            action,
            attrs,
            children,
        }
    }

    /// Element tag or lookup expression, interpreted by the renderer.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Whether this node selects an existing element or appends a new one.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Attributes applied to the element, in insertion order.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Looks up a single attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Iterates the subtree in pre-order (document order), starting with `self`.
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }
}

/// Pre-order iterator over a [`Sel`] subtree.
#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a Sel>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Sel;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(selector: &str) -> Sel {
        Sel::new(selector, Action::Append, Attributes::new(), Vec::new())
    }

    #[test]
    fn depth_first_follows_document_order() {
        let tree = Sel::new(
            "svg",
            Action::Select,
            Attributes::new(),
            vec![
                Sel::new("g", Action::Append, Attributes::new(), vec![leaf("rect"), leaf("text")]),
                leaf("path"),
            ],
        );
        let order: Vec<_> = tree.depth_first().map(Sel::selector).collect();
        assert_eq!(order, ["svg", "g", "rect", "text", "path"]);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn empty_collections_serialize_as_empty() {
        let json = serde_json::to_value(leaf("rect")).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({"selector": "rect", "action": "append", "attrs": {}, "children": []})
        );
    }

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let sel: Sel =
            serde_json::from_str(r#"{"selector": "svg", "action": "select"}"#).expect("parses");
        assert!(sel.attrs().is_empty());
        assert!(sel.children().is_empty());
    }
}
