use std::borrow::Cow;

use qd3_core::markup::{self, MarkupElement, MarkupError};
use qd3_core::namespace::{self, QualifiedName};
use qd3_core::{AttrValue, Attributes};
use serde::Serialize;

/// Virtual element descriptor handed to a UI runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VElement {
    tag: String,
    props: Attributes,
    children: Vec<VElement>,
}

impl VElement {
    /// Creates a descriptor from its parts.
    #[must_use]
    pub fn new(tag: impl Into<String>, props: Attributes, children: Vec<Self>) -> Self {
        Self {
            tag: tag.into(),
            props,
            children,
        }
    }

    /// Element tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element properties.
    #[must_use]
    pub const fn props(&self) -> &Attributes {
        &self.props
    }

    /// Looks up a single property.
    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&AttrValue> {
        self.props.get(key)
    }

    /// Child descriptors in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Prints the element and its subtree as markup.
    ///
    /// Tags resolve their namespace from the enclosing element, so the output matches what a
    /// document renderer produces for the same tree.
    ///
    /// # Errors
    ///
    /// Fails if a tag or property name is not a valid markup name.
    pub fn to_markup(&self) -> Result<String, MarkupError> {
        markup::to_markup(&self)
    }
}

impl<'a> MarkupElement for &'a VElement {
    fn name(&self, parent: &'static str) -> QualifiedName<'_> {
        namespace::element(&self.tag, parent)
    }

    fn attributes(&self) -> impl Iterator<Item = (&str, Cow<'_, str>)> {
        self.props.iter().map(|(key, value)| {
            let value = match value {
                AttrValue::Str(text) => Cow::Borrowed(text.as_str()),
                other => Cow::Owned(other.to_string()),
            };
            (key.as_str(), value)
        })
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        let element: &'a VElement = *self;
        element.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_nested_markup() {
        let mut props = Attributes::new();
        props.insert("width".into(), AttrValue::from(10));
        props.insert("stroke".into(), AttrValue::from("red"));
        let element = VElement::new(
            "svg",
            Attributes::new(),
            vec![VElement::new("rect", props, Vec::new())],
        );
        assert_eq!(
            element.to_markup().expect("prints"),
            "<svg><rect width=\"10\" stroke=\"red\"></rect></svg>"
        );
    }

    #[test]
    fn prefixed_tags_print_their_local_name() {
        let element = VElement::new(
            "svg",
            Attributes::new(),
            vec![VElement::new("svg:g", Attributes::new(), Vec::new())],
        );
        assert_eq!(element.to_markup().expect("prints"), "<svg><g></g></svg>");
    }

    #[test]
    fn invalid_prop_names_are_rejected() {
        let mut props = Attributes::new();
        props.insert("x\" onload=\"alert(1)".into(), AttrValue::from(1));
        let element = VElement::new("rect", props, Vec::new());
        assert!(matches!(
            element.to_markup(),
            Err(MarkupError::InvalidName(name)) if name.starts_with("x\"")
        ));
    }

    #[test]
    fn serializes_as_descriptor() {
        let element = VElement::new("g", Attributes::new(), Vec::new());
        let json = serde_json::to_value(&element).expect("serializes");
        assert_eq!(json, serde_json::json!({"tag": "g", "props": {}, "children": []}));
    }
}
