//! Arena-backed document for native targets.
//!
//! [`MemoryDocument`] stores elements in a flat vector addressed by [`NodeId`]. Index `0` is the
//! document node itself; it owns the top-level elements but is never matched by selectors.

use core::fmt;
use std::borrow::Cow;

use indexmap::IndexMap;
use qd3_core::AttrValue;
use qd3_core::markup::{self, MarkupElement, MarkupError};
use qd3_core::namespace::{self, QualifiedName};

use crate::document::LiveDocument;
use crate::error::DomError;
use crate::selector::Selector;

/// Identifier for an element stored inside a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a new [`NodeId`] from the raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index backing this identifier.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeEntry {
    tag: String,
    namespace: &'static str,
    attributes: IndexMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeEntry {
    fn new(tag: String, namespace: &'static str, parent: Option<NodeId>) -> Self {
        Self {
            tag,
            namespace,
            attributes: IndexMap::new(),
            parent,
            children: Vec::new(),
        }
    }
}

/// In-memory live document.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeEntry>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    const ROOT: NodeId = NodeId(0);

    /// Creates a document containing only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeEntry::new("#document".to_owned(), namespace::XHTML, None)],
        }
    }

    /// Returns the document node, the parent of all top-level elements.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Returns `true` if `id` is an element of this document (the document node is not).
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        id != Self::ROOT && id.index() < self.nodes.len()
    }

    /// Creates a `tag` element as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if `parent` is not part of this document and
    /// [`DomError::InvalidName`] if `tag` is not a valid element name.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        let inherited = self.entry(parent)?.namespace;
        let name = namespace::element(tag, inherited);
        if !namespace::is_valid_name(name.local) {
            return Err(DomError::InvalidName(tag.to_owned()));
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(NodeEntry::new(name.local.to_owned(), name.namespace, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Sets an attribute on an element, replacing an existing value in place.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if `id` is not an element of this document and
    /// [`DomError::InvalidName`] if `key` is not a valid attribute name.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        if !self.is_element(id) {
            return Err(DomError::UnknownNode(id));
        }
        if !namespace::is_valid_name(key) {
            return Err(DomError::InvalidName(key.to_owned()));
        }
        self.nodes[id.index()]
            .attributes
            .insert(key.to_owned(), value.into());
        Ok(())
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|entry| entry.tag.as_str())
    }

    /// Namespace URI of an element.
    #[must_use]
    pub fn namespace(&self, id: NodeId) -> Option<&'static str> {
        self.element(id).map(|entry| entry.namespace)
    }

    /// Value of one attribute.
    #[must_use]
    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.element(id)
            .and_then(|entry| entry.attributes.get(key))
            .map(String::as_str)
    }

    /// All attributes of an element in the order they were first set.
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.element(id)
            .into_iter()
            .flat_map(|entry| entry.attributes.iter())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Parent of a node; `None` for the document node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|entry| entry.parent)
    }

    /// Children of a node in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map_or(&[], |entry| entry.children.as_slice())
    }

    /// Iterates all descendants of `id` in document order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: self.children(id).iter().rev().copied().collect(),
        }
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns `true` if the document holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first element matching `selector`, searching descendants of `scope` or the
    /// whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is malformed or `scope` is not part of this document.
    pub fn query_selector(
        &self,
        selector: &str,
        scope: Option<NodeId>,
    ) -> Result<Option<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        let scope = self.scope(scope)?;
        Ok(self
            .descendants(scope)
            .find(|candidate| selector.matches(self, *candidate)))
    }

    /// Returns every element matching `selector` in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is malformed or `scope` is not part of this document.
    pub fn query_selector_all(
        &self,
        selector: &str,
        scope: Option<NodeId>,
    ) -> Result<Vec<NodeId>, DomError> {
        let selector = Selector::parse(selector)?;
        let scope = self.scope(scope)?;
        Ok(self
            .descendants(scope)
            .filter(|candidate| selector.matches(self, *candidate))
            .collect())
    }

    /// Markup of `id` and its subtree. For the document node this is the markup of all
    /// top-level elements.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::UnknownNode`] if `id` is not part of this document and
    /// [`DomError::Markup`] if printing fails.
    pub fn outer_html(&self, id: NodeId) -> Result<String, DomError> {
        let node = MarkupNode {
            document: self,
            entry: self.entry(id)?,
        };
        let printed = if id == Self::ROOT {
            markup::children_to_markup(&node)
        } else {
            markup::to_markup(&node)
        };
        printed.map_err(|error: MarkupError| DomError::Markup(error.to_string()))
    }

    /// Markup of every top-level element.
    ///
    /// # Errors
    ///
    /// See [`outer_html`](Self::outer_html).
    pub fn to_markup(&self) -> Result<String, DomError> {
        self.outer_html(Self::ROOT)
    }

    fn scope(&self, scope: Option<NodeId>) -> Result<NodeId, DomError> {
        let scope = scope.unwrap_or(Self::ROOT);
        self.entry(scope).map(|_| scope)
    }

    fn entry(&self, id: NodeId) -> Result<&NodeEntry, DomError> {
        self.nodes.get(id.index()).ok_or(DomError::UnknownNode(id))
    }

    fn element(&self, id: NodeId) -> Option<&NodeEntry> {
        if self.is_element(id) {
            self.nodes.get(id.index())
        } else {
            None
        }
    }
}

struct MarkupNode<'a> {
    document: &'a MemoryDocument,
    entry: &'a NodeEntry,
}

impl MarkupElement for MarkupNode<'_> {
    fn name(&self, _parent: &'static str) -> QualifiedName<'_> {
        QualifiedName {
            namespace: self.entry.namespace,
            local: &self.entry.tag,
        }
    }

    fn attributes(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.entry
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), Cow::Borrowed(value.as_str())))
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let document = self.document;
        self.entry
            .children
            .iter()
            .filter_map(move |id| document.nodes.get(id.index()))
            .map(move |entry| MarkupNode { document, entry })
    }
}

impl LiveDocument for MemoryDocument {
    type Handle = NodeId;
    type Error = DomError;

    fn select(&self, selector: &str, scope: Option<&NodeId>) -> Result<Option<NodeId>, DomError> {
        self.query_selector(selector, scope.copied())
    }

    fn append(&mut self, tag: &str, parent: &NodeId) -> Result<NodeId, DomError> {
        self.create_element(*parent, tag)
    }

    fn set_attribute(&mut self, handle: &NodeId, key: &str, value: &AttrValue) -> Result<(), DomError> {
        Self::set_attribute(self, *handle, key, value.to_string())
    }
}

/// Pre-order iterator over the descendants of a node.
#[derive(Debug)]
pub struct Descendants<'a> {
    document: &'a MemoryDocument,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}
