use qd3_core::{Action, Sel};

use crate::{document::LiveDocument, error::RenderError};

/// Applies `sel` to `document` and returns the handle of its root element.
///
/// `Select` nodes resolve their selector inside `parent` (or the whole document when there is no
/// parent) and `Append` nodes create a child of `parent`. Every attribute is then set on the
/// element and the children are rendered beneath it in order.
///
/// Rendering stops at the first failure. Mutations already applied stay in the document.
///
/// # Errors
///
/// - [`RenderError::SelectorNotFound`] if a `Select` node matches nothing.
/// - [`RenderError::AppendWithoutParent`] if an `Append` node has no parent, i.e. it is the root
///   and `parent` is `None`.
/// - [`RenderError::Document`] if the document rejects an operation.
pub fn render<D: LiveDocument>(
    document: &mut D,
    sel: &Sel,
    parent: Option<&D::Handle>,
) -> Result<D::Handle, RenderError> {
    tracing::debug!(
        root = sel.selector(),
        nodes = sel.node_count(),
        scoped = parent.is_some(),
        "rendering into document"
    );
    let handle = render_node(document, sel, parent)?;
    tracing::debug!(root = sel.selector(), "document render finished");
    Ok(handle)
}

fn render_node<D: LiveDocument>(
    document: &mut D,
    sel: &Sel,
    parent: Option<&D::Handle>,
) -> Result<D::Handle, RenderError> {
    let handle = resolve(document, sel, parent)?;

    for (key, value) in sel.attrs() {
        document
            .set_attribute(&handle, key, value)
            .map_err(document_error)?;
    }

    for child in sel.children() {
        render_node(document, child, Some(&handle))?;
    }

    Ok(handle)
}

fn resolve<D: LiveDocument>(
    document: &mut D,
    sel: &Sel,
    parent: Option<&D::Handle>,
) -> Result<D::Handle, RenderError> {
    let selector = sel.selector();
    match sel.action() {
        Action::Select => {
            let found = document
                .select(selector, parent)
                .map_err(document_error)?
                .ok_or_else(|| RenderError::SelectorNotFound {
                    selector: selector.to_owned(),
                })?;
            tracing::trace!(selector, handle = ?found, "selected element");
            Ok(found)
        }
        Action::Append => {
            let parent = parent.ok_or_else(|| RenderError::AppendWithoutParent {
                selector: selector.to_owned(),
            })?;
            let created = document.append(selector, parent).map_err(document_error)?;
            tracing::trace!(selector, handle = ?created, "appended element");
            Ok(created)
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn document_error<E: core::fmt::Display>(error: E) -> RenderError {
    RenderError::Document(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomError, MemoryDocument, NodeId};
    use pretty_assertions::assert_eq;
    use qd3_core::{Attributes, Selection, serialize};

    fn host() -> (MemoryDocument, NodeId) {
        let mut document = MemoryDocument::new();
        let svg = document
            .create_element(document.root(), "svg")
            .expect("svg host");
        (document, svg)
    }

    #[test]
    fn rect_scene_appends_one_rect() {
        let (mut document, svg) = host();
        let mut scene = Selection::select("svg");
        scene
            .append("rect")
            .attr("width", 10)
            .attr("height", 10)
            .attr("stroke", "red");

        let root = render(&mut document, &serialize(&scene), None).expect("renders");
        assert_eq!(root, svg);

        let children = document.children(svg);
        assert_eq!(children.len(), 1);
        let rect = children[0];
        assert_eq!(document.tag(rect), Some("rect"));
        let attributes: Vec<_> = document.attributes(rect).collect();
        assert_eq!(attributes, [("width", "10"), ("height", "10"), ("stroke", "red")]);
    }

    #[test]
    fn missing_selector_fails_fast() {
        let (mut document, _) = host();
        let mut scene = Selection::select("#missing");
        scene.append("rect").attr("width", 10);

        let error = render(&mut document, &serialize(&scene), None).expect_err("must fail");
        assert_eq!(
            error,
            RenderError::SelectorNotFound {
                selector: "#missing".into()
            }
        );
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn nested_select_is_scoped_to_parent() {
        let mut document = MemoryDocument::new();
        let outside = document.create_element(document.root(), "g").expect("g");
        let svg = document.create_element(document.root(), "svg").expect("svg");
        let inside = document.create_element(svg, "g").expect("g");

        let mut scene = Selection::select("svg");
        scene.attr("width", 960);
        scene
            .select_descendant("g")
            .attr("transform", "translate(50, 20)");
        let ir = serialize(&scene);

        render(&mut document, &ir, None).expect("renders");
        assert_eq!(document.attribute(inside, "transform"), Some("translate(50, 20)"));
        assert_eq!(document.attribute(outside, "transform"), None);
        assert_eq!(document.attribute(svg, "width"), Some("960"));
    }

    #[test]
    fn root_append_without_parent_is_rejected() {
        let (mut document, _) = host();
        let ir = Sel::new("rect", Action::Append, Attributes::new(), Vec::new());
        assert_eq!(
            render(&mut document, &ir, None),
            Err(RenderError::AppendWithoutParent {
                selector: "rect".into()
            })
        );
    }

    #[test]
    fn root_append_with_parent_creates_child() {
        let (mut document, svg) = host();
        let ir = Sel::new("rect", Action::Append, Attributes::new(), Vec::new());
        let rect = render(&mut document, &ir, Some(&svg)).expect("renders");
        assert_eq!(document.parent(rect), Some(svg));
    }

    #[test]
    fn terminal_nodes_are_fine() {
        let (mut document, svg) = host();
        let ir = serialize(&Selection::select("svg"));
        assert_eq!(render(&mut document, &ir, None), Ok(svg));
        assert_eq!(document.to_markup().expect("prints"), "<svg></svg>");
    }

    #[test]
    fn document_errors_are_wrapped() {
        let (mut document, _) = host();
        let ir = serialize(&Selection::select("svg >"));
        let error = render(&mut document, &ir, None).expect_err("bad selector");
        let expected = DomError::from(crate::SelectorError::DanglingCombinator { position: 4 });
        assert_eq!(error, RenderError::Document(expected.to_string()));
    }
}
