use qd3_core::{Action, Attributes, Sel};

use crate::element::VElement;

/// Element-creation API of a UI runtime.
///
/// The virtual renderer calls [`create_element`](Self::create_element) bottom-up: children are
/// created first and passed in document order.
pub trait ElementFactory {
    /// The runtime's element type.
    type Element;

    /// Creates one element from its tag, properties and already-created children.
    fn create_element(
        &mut self,
        tag: &str,
        props: &Attributes,
        children: Vec<Self::Element>,
    ) -> Self::Element;
}

/// Factory producing plain [`VElement`] descriptors.
#[derive(Debug, Default, Clone, Copy)]
pub struct VElementFactory;

impl ElementFactory for VElementFactory {
    type Element = VElement;

    fn create_element(&mut self, tag: &str, props: &Attributes, children: Vec<VElement>) -> VElement {
        VElement::new(tag, props.clone(), children)
    }
}

/// Renders `sel` into a [`VElement`] tree.
#[must_use]
pub fn render(sel: &Sel) -> VElement {
    let element = render_with(sel, &mut VElementFactory);
    tracing::debug!(root = sel.selector(), nodes = sel.node_count(), "rendered virtual tree");
    element
}

/// Renders `sel` through an arbitrary runtime factory.
///
/// Both [`Select`](qd3_core::Action::Select) and [`Append`](qd3_core::Action::Append) nodes map
/// to plain elements tagged with the node's selector.
pub fn render_with<F: ElementFactory>(sel: &Sel, factory: &mut F) -> F::Element {
    let children = sel
        .children()
        .iter()
        .map(|child| render_with(child, factory))
        .collect();
    match sel.action() {
        // No document to resolve against: both actions describe the element itself.
        Action::Select | Action::Append => {
            factory.create_element(sel.selector(), sel.attrs(), children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qd3_core::{AttrValue, Selection, serialize};

    fn rect_scene() -> Sel {
        let mut svg = Selection::select("svg");
        svg.append("rect")
            .attr("width", 10)
            .attr("height", 10)
            .attr("stroke", "red");
        serialize(&svg)
    }

    #[test]
    fn renders_rect_scene() {
        let element = render(&rect_scene());
        assert_eq!(element.tag(), "svg");
        assert!(element.props().is_empty());
        assert_eq!(element.children().len(), 1);

        let rect = &element.children()[0];
        assert_eq!(rect.tag(), "rect");
        assert_eq!(rect.prop("width"), Some(&AttrValue::Int(10)));
        assert_eq!(rect.prop("height"), Some(&AttrValue::Int(10)));
        assert_eq!(rect.prop("stroke"), Some(&AttrValue::from("red")));
        assert!(rect.children().is_empty());
    }

    #[test]
    fn action_does_not_change_output() {
        let selected = Sel::new("g", Action::Select, Attributes::new(), Vec::new());
        let appended = Sel::new("g", Action::Append, Attributes::new(), Vec::new());
        assert_eq!(render(&selected), render(&appended));

        let mixed = Sel::new("g", Action::Append, Attributes::new(), vec![selected.clone()]);
        let element = render(&mixed);
        assert_eq!(element.children(), [render(&appended)]);
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ElementFactory for Recorder {
        type Element = usize;

        fn create_element(&mut self, tag: &str, props: &Attributes, children: Vec<usize>) -> usize {
            self.calls.push(format!("{tag}:{}:{}", props.len(), children.len()));
            self.calls.len()
        }
    }

    #[test]
    fn factory_sees_children_before_parents() {
        let mut recorder = Recorder::default();
        let created = render_with(&rect_scene(), &mut recorder);
        assert_eq!(created, 2);
        assert_eq!(recorder.calls, ["rect:3:0", "svg:0:1"]);
    }
}
