//! Fluent construction of element trees.

use crate::ir::{Action, Attributes, Sel};
use crate::value::AttrValue;

/// Mutable builder for one node of an element tree.
///
/// Start a tree with [`Selection::select`], then grow it with [`append`](Self::append) and
/// [`attr`](Self::attr). `append` hands back the *new child*, so chains descend depth-first:
///
/// ```
/// use qd3_core::Selection;
///
/// let mut svg = Selection::select("svg");
/// svg.append("g").attr("class", "axis").append("line").attr("y2", 40);
/// assert_eq!(svg.children()[0].children()[0].selector(), "line");
/// ```
///
/// The builder is exclusively borrowed while it is filled; once finished it is frozen into an
/// immutable [`Sel`] with [`freeze`](Self::freeze) or [`serialize`](crate::serialize).
#[derive(Debug, Clone)]
pub struct Selection {
    pub(crate) selector: String,
    pub(crate) action: Action,
    pub(crate) attrs: Attributes,
    pub(crate) children: Vec<Selection>,
}

impl Selection {
    fn new(selector: impl Into<String>, action: Action) -> Self {
        Self {
            selector: selector.into(),
            action,
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Starts a tree rooted at an existing element addressed by `selector`.
    #[must_use]
    pub fn select(selector: impl Into<String>) -> Self {
        Self::new(selector, Action::Select)
    }

    /// Adds a new `selector` element as the last child and returns the child builder.
    pub fn append(&mut self, selector: impl Into<String>) -> &mut Self {
        let index = self.children.len();
        self.children.push(Self::new(selector, Action::Append));
        &mut self.children[index]
    }

    /// Adds a child node that addresses an existing element inside this one, and returns it.
    ///
    /// Renderers resolve the selector relative to this node's element.
    pub fn select_descendant(&mut self, selector: impl Into<String>) -> &mut Self {
        let index = self.children.len();
        self.children.push(Self::new(selector, Action::Select));
        &mut self.children[index]
    }

    /// Sets an attribute, overwriting any earlier value for the same key.
    pub fn attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Element tag or lookup expression of this node.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Action of this node.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Attributes set so far.
    #[must_use]
    pub const fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Children appended so far.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Consumes the builder and returns the frozen tree.
    #[must_use]
    pub fn freeze(self) -> Sel {
        Sel::new(
            self.selector,
            self.action,
            self.attrs,
            self.children.into_iter().map(Self::freeze).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_select_and_children_append() {
        let mut svg = Selection::select("svg");
        svg.append("rect");
        assert_eq!(svg.action(), Action::Select);
        assert_eq!(svg.children()[0].action(), Action::Append);
    }

    #[test]
    fn attr_is_last_write_wins() {
        let mut rect = Selection::select("rect");
        rect.attr("width", 10).attr("stroke", "red").attr("width", 20);
        assert_eq!(rect.attrs().len(), 2);
        assert_eq!(rect.attrs().get("width"), Some(&AttrValue::Int(20)));
        let keys: Vec<_> = rect.attrs().keys().map(String::as_str).collect();
        assert_eq!(keys, ["width", "stroke"]);
    }

    #[test]
    fn attr_and_append_interleave_freely() {
        let mut before = Selection::select("g");
        before.attr("class", "legend");
        before.append("rect");
        before.append("text");

        let mut after = Selection::select("g");
        after.append("rect");
        after.attr("class", "legend");
        after.append("text");

        assert_eq!(before.freeze(), after.freeze());
    }

    #[test]
    fn select_descendant_keeps_select_action() {
        let mut svg = Selection::select("svg");
        svg.select_descendant("g").attr("transform", "translate(50, 20)");
        let g = &svg.children()[0];
        assert_eq!(g.action(), Action::Select);
        assert_eq!(g.attrs().len(), 1);
    }

    #[test]
    fn append_returns_the_child() {
        let mut svg = Selection::select("svg");
        svg.append("g").append("path").attr("d", "M0,0L1,1");
        let g = &svg.children()[0];
        assert_eq!(g.selector(), "g");
        assert!(g.attrs().is_empty());
        assert_eq!(g.children()[0].attrs().len(), 1);
    }
}
